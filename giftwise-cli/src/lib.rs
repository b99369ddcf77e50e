//! Command-line interface for ranking gift catalogs with Giftwise.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

mod error;
mod options;
mod suggest;

pub use error::CliError;

use options::run_options;
use suggest::{SuggestArgs, run_suggest};

const ARG_CATALOG: &str = "catalog";
const ARG_CRITERIA: &str = "criteria";
const ARG_OCCASION: &str = "occasion";
const ARG_RELATION: &str = "relation";
const ARG_AGE_GROUP: &str = "age-group";
const ARG_BUDGET: &str = "budget";
const ARG_INTEREST: &str = "interest";
const ARG_PERSONALITY: &str = "personality";
const ARG_MAX_SUGGESTIONS: &str = "max-suggestions";
const ARG_MIN_SCORE: &str = "min-score";
const ENV_CATALOG: &str = "GIFTWISE_CMDS_SUGGEST_CATALOG";
const ENV_OCCASION: &str = "GIFTWISE_CMDS_SUGGEST_OCCASION";
const ENV_RELATION: &str = "GIFTWISE_CMDS_SUGGEST_RELATION";
const ENV_AGE_GROUP: &str = "GIFTWISE_CMDS_SUGGEST_AGE_GROUP";
const ENV_BUDGET: &str = "GIFTWISE_CMDS_SUGGEST_BUDGET";

/// Run the Giftwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Suggest(args) => run_suggest(args),
        Command::Options => run_options(),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "giftwise",
    about = "Rank a gift catalog against a recipient description",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest gifts from a JSON catalog.
    Suggest(SuggestArgs),
    /// List the occasions, relations and other keys the scorer understands.
    Options,
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
