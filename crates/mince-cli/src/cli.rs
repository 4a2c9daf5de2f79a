use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mince")]
#[command(about = "Structural digests, year parsing and date ranges")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    Digest(DigestCommand),
    Year(YearCommand),
    Days(DaysCommand),
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DigestCommand {
    /// JSON, YAML or JSONL file holding one mapping or a list of mappings.
    #[arg(long)]
    pub input: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long = "include", value_name = "KEY")]
    pub include_keys: Vec<String>,
    #[arg(long = "exclude", value_name = "KEY")]
    pub exclude_keys: Vec<String>,
    /// Print the canonical text next to each digest.
    #[arg(long, default_value_t = false)]
    pub canonical: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct YearCommand {
    pub value: String,
    #[arg(long, allow_negative_numbers = true)]
    pub gte: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub lte: Option<i32>,
    #[arg(long)]
    pub shift: Option<i32>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DaysCommand {
    /// First day, `YYYY-MM-DD`.
    #[arg(long)]
    pub start: String,
    /// Day after the last one, `YYYY-MM-DD`. Defaults to today.
    #[arg(long)]
    pub stop: Option<String>,
    #[arg(long)]
    pub step_days: Option<i64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
