use crate::cli::{DaysCommand, DigestCommand, OutputFormat, YearCommand};
use crate::config::{load_digest_config, DigestConfig};
use crate::io::load_records;
use chrono::{NaiveDate, TimeDelta};
use mince_core::{ConfigurationError, EncodingError, StructuralDigest, StructuredIssue};
use mince_dates::{irange, string2year, DateRangeError, IsoWeekDay, WeekDay, YearParseError};
use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("digest config load failed: {0}")]
    ConfigLoad(String),
    #[error("digest configuration invalid: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("input load failed: {}", join_issues(.0))]
    Input(Vec<StructuredIssue>),
    #[error("record {index} could not be encoded: {source}")]
    Encoding {
        index: usize,
        #[source]
        source: EncodingError,
    },
    #[error(transparent)]
    Year(#[from] YearParseError),
    #[error("invalid date `{value}`: expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("step of {days} days is out of range")]
    InvalidStep { days: i64 },
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

fn join_issues(issues: &[StructuredIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn execute_digest(command: &DigestCommand) -> Result<String, CliError> {
    let config = match &command.config {
        Some(path) => load_digest_config(path).map_err(|error| CliError::ConfigLoad(error.to_string()))?,
        None => DigestConfig::default(),
    }
    .with_overrides(&command.include_keys, &command.exclude_keys);

    let digest = StructuralDigest::configure(Some(config.include_keys), Some(config.exclude_keys))?;
    let records = load_records(&command.input).map_err(CliError::Input)?;

    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let (hash, canonical) = digest
            .canonical_digest(record)
            .map_err(|source| CliError::Encoding { index, source })?;
        rows.push((hash, command.canonical.then_some(canonical)));
    }

    match command.format {
        OutputFormat::Text => Ok(rows
            .into_iter()
            .map(|(hash, canonical)| match canonical {
                Some(canonical) => format!("{hash}  {canonical}"),
                None => hash,
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let items = rows
                .into_iter()
                .enumerate()
                .map(|(index, (hash, canonical))| {
                    let mut item = json!({ "index": index, "digest": hash });
                    if let (Some(canonical), Value::Object(object)) = (canonical, &mut item) {
                        object.insert("canonical".to_string(), Value::String(canonical));
                    }
                    item
                })
                .collect::<Vec<_>>();
            Ok(serde_json::to_string_pretty(&items)?)
        }
    }
}

pub fn execute_year(command: &YearCommand) -> Result<String, CliError> {
    let year = string2year(command.value.as_str(), command.gte, command.lte, command.shift)?;
    match command.format {
        OutputFormat::Text => Ok(year.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(
            &json!({ "input": command.value, "year": year }),
        )?),
    }
}

pub fn execute_days(command: &DaysCommand) -> Result<String, CliError> {
    let start = parse_date(command.start.as_str())?;
    let stop = command.stop.as_deref().map(parse_date).transpose()?;
    let step = command
        .step_days
        .map(|days| TimeDelta::try_days(days).ok_or(CliError::InvalidStep { days }))
        .transpose()?;
    let days = irange(start, stop, step)?.collect::<Vec<_>>();
    tracing::debug!(start = %start, count = days.len(), "expanded date range");

    match command.format {
        OutputFormat::Text => Ok(days
            .iter()
            .map(|day| format!("{} {}", day.format("%Y-%m-%d"), WeekDay::of(day)))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let items = days
                .iter()
                .map(|day| {
                    json!({
                        "date": day.format("%Y-%m-%d").to_string(),
                        "weekday": WeekDay::of(day).value(),
                        "iso_weekday": IsoWeekDay::of(day).value(),
                    })
                })
                .collect::<Vec<_>>();
            Ok(serde_json::to_string_pretty(&items)?)
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| CliError::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
