mod cli;
mod config;
mod io;
mod run;

pub use cli::{Cli, Commands, DaysCommand, DigestCommand, OutputFormat, YearCommand};
pub use config::{
    load_digest_config, validate_digest_config, DigestConfig, DigestConfigError, DIGEST_CONFIG_SCHEMA,
};
pub use io::{load_records, parse_records, RecordFormat};
pub use run::{execute_days, execute_digest, execute_year, CliError};
