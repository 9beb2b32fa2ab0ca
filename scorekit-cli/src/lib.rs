//! Command-line interface for scoring values with scorekit.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod diff;
mod error;

pub use error::CliError;

use diff::{DiffArgs, run_diff};

pub(crate) const ARG_DIFF_OUTPUT: &str = "output";
pub(crate) const ARG_DIFF_EXPECTED: &str = "expected";
pub(crate) const ARG_DIFF_NAME: &str = "name";
pub(crate) const ENV_DIFF_OUTPUT: &str = "SCOREKIT_CMDS_DIFF_OUTPUT";

/// Run the scorekit CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// scorer rejects its inputs, or the score cannot be written to stdout.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Diff(args) => run_diff(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "scorekit",
    about = "Score produced values against expected references",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score two numbers by their relative difference.
    Diff(DiffArgs),
}

#[cfg(test)]
mod tests;
