use mince_core::{FieldPath, Mapping, StructuredIssue, StructuredValue};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
    JsonLines,
}

impl RecordFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("jsonl") | Some("ndjson") => Self::JsonLines,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Reads a file holding one mapping, a list of mappings, or one mapping per line.
pub fn load_records(path: &Path) -> Result<Vec<Mapping>, Vec<StructuredIssue>> {
    let text = fs::read_to_string(path).map_err(|error| {
        vec![StructuredIssue::error(
            "input_io_error",
            FieldPath::root(),
            format!("read file `{}` failed: {error}", path.display()),
            "input.read_failed",
        )]
    })?;
    let records = parse_records(text.as_str(), RecordFormat::from_path(path))?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

pub fn parse_records(text: &str, format: RecordFormat) -> Result<Vec<Mapping>, Vec<StructuredIssue>> {
    match format {
        RecordFormat::Json => {
            let value = serde_json::from_str::<Value>(text)
                .map_err(|error| vec![parse_issue(FieldPath::root(), format!("json decode error: {error}"))])?;
            document_records(value)
        }
        RecordFormat::Yaml => {
            let value = serde_yaml::from_str::<Value>(text)
                .map_err(|error| vec![parse_issue(FieldPath::root(), format!("yaml decode error: {error}"))])?;
            document_records(value)
        }
        RecordFormat::JsonLines => json_lines_records(text),
    }
}

fn document_records(value: Value) -> Result<Vec<Mapping>, Vec<StructuredIssue>> {
    match value {
        Value::Array(items) => {
            let mut records = Vec::with_capacity(items.len());
            let mut issues = Vec::new();
            for (index, item) in items.into_iter().enumerate() {
                match into_mapping(item) {
                    Some(mapping) => records.push(mapping),
                    None => issues.push(not_a_mapping(FieldPath::root().child_index(index))),
                }
            }
            if issues.is_empty() {
                Ok(records)
            } else {
                Err(issues)
            }
        }
        other => into_mapping(other)
            .map(|mapping| vec![mapping])
            .ok_or_else(|| vec![not_a_mapping(FieldPath::root())]),
    }
}

fn json_lines_records(text: &str) -> Result<Vec<Mapping>, Vec<StructuredIssue>> {
    let mut records = Vec::new();
    let mut issues = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let path = FieldPath::root().child_index(index);
        match serde_json::from_str::<Value>(line) {
            Ok(value) => match into_mapping(value) {
                Some(mapping) => records.push(mapping),
                None => issues.push(not_a_mapping(path)),
            },
            Err(error) => issues.push(parse_issue(
                path,
                format!("jsonl decode error at line {}: {error}", index + 1),
            )),
        }
    }
    if issues.is_empty() {
        Ok(records)
    } else {
        StructuredIssue::sort_stable(&mut issues);
        Err(issues)
    }
}

fn into_mapping(value: Value) -> Option<Mapping> {
    match StructuredValue::from(value) {
        StructuredValue::Mapping(mapping) => Some(mapping),
        _ => None,
    }
}

fn parse_issue(field_path: FieldPath, message: String) -> StructuredIssue {
    StructuredIssue::error("input_parse_error", field_path, message, "input.parse")
}

fn not_a_mapping(field_path: FieldPath) -> StructuredIssue {
    StructuredIssue::error(
        "input_shape_error",
        field_path,
        "record must be a mapping",
        "input.record.mapping",
    )
}

#[cfg(test)]
#[path = "read_document_test.rs"]
mod tests;
