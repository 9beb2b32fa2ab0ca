//! Diff command implementation for the scorekit CLI.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use scorekit_core::{Score, Scorer};
use scorekit_scorer::NumericDiff;
use serde::{Deserialize, Serialize};

use crate::{ARG_DIFF_EXPECTED, ARG_DIFF_NAME, ARG_DIFF_OUTPUT, CliError, ENV_DIFF_OUTPUT};

/// CLI arguments for the `diff` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "diff",
    long_about = "Compare a produced number with an expected number and print \
                 the relative-difference score as JSON. Values can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Score two numbers by their relative difference"
)]
#[ortho_config(prefix = "SCOREKIT")]
pub(crate) struct DiffArgs {
    /// The produced value to score.
    #[arg(long = ARG_DIFF_OUTPUT, value_name = "number", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) output: Option<f64>,
    /// The reference value the output should match.
    #[arg(long = ARG_DIFF_EXPECTED, value_name = "number", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) expected: Option<f64>,
    /// Display name recorded on the score.
    #[arg(long = ARG_DIFF_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) name: Option<String>,
}

impl DiffArgs {
    pub(crate) fn into_config(self) -> Result<DiffConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DiffConfig::try_from(merged)
    }
}

/// Resolved `diff` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DiffConfig {
    /// Produced value.
    pub(crate) output: f64,
    /// Reference value; absence is reported by the scorer.
    pub(crate) expected: Option<f64>,
    /// Optional display name overriding `NumericDiff`.
    pub(crate) name: Option<String>,
}

impl DiffConfig {
    fn scorer(&self) -> NumericDiff {
        self.name
            .clone()
            .map_or_else(NumericDiff::new, NumericDiff::with_name)
    }

    pub(crate) fn evaluate(&self) -> Result<Score, CliError> {
        let scorer = self.scorer();
        let score = scorer.evaluate(&self.output, self.expected.as_ref())?;
        if !score.is_normalised() {
            log::warn!(
                "{} produced {} outside 0.0..=1.0 (output {}, expected {:?})",
                score.name,
                score.score,
                self.output,
                self.expected
            );
        }
        Ok(score)
    }
}

impl TryFrom<DiffArgs> for DiffConfig {
    type Error = CliError;

    fn try_from(args: DiffArgs) -> Result<Self, Self::Error> {
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_DIFF_OUTPUT,
            env: ENV_DIFF_OUTPUT,
        })?;
        Ok(Self {
            output,
            expected: args.expected,
            name: args.name,
        })
    }
}

pub(crate) fn run_diff(args: DiffArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_diff_with(args, &mut stdout)
}

pub(crate) fn run_diff_with(args: DiffArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let score = config.evaluate()?;
    write_score(writer, &score)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DiffConfig, CliError> {
    let merged = DiffArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DiffConfig::try_from(merged)
}

fn write_score(writer: &mut dyn Write, score: &Score) -> Result<(), CliError> {
    let payload = score.as_json().map_err(CliError::SerializeScore)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteScoreOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteScoreOutput)?;
    Ok(())
}
