//! Error types emitted by the scorekit CLI.

use std::sync::Arc;

use scorekit_core::ScoreError;
use thiserror::Error;

/// Errors emitted by the scorekit CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// The scorer rejected its inputs.
    #[error(transparent)]
    Score(#[from] ScoreError),
    /// Serializing the score failed.
    #[error("failed to serialize score: {0}")]
    SerializeScore(#[source] serde_json::Error),
    /// Writing the score output failed.
    #[error("failed to write score output: {0}")]
    WriteScoreOutput(#[source] std::io::Error),
}
