use mince_core::{FieldPath, FieldPathSegment, StructuredIssue};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DIGEST_CONFIG_SCHEMA: &str = "mince/0.0.1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestConfig {
    #[serde(default = "default_digest_schema")]
    pub schema: String,
    #[serde(default)]
    pub include_keys: Vec<String>,
    #[serde(default)]
    pub exclude_keys: Vec<String>,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            schema: default_digest_schema(),
            include_keys: Vec::new(),
            exclude_keys: Vec::new(),
        }
    }
}

impl DigestConfig {
    /// Command line keys replace both lists from the file when any are given.
    pub fn with_overrides(mut self, include_keys: &[String], exclude_keys: &[String]) -> Self {
        if !include_keys.is_empty() || !exclude_keys.is_empty() {
            self.include_keys = include_keys.to_vec();
            self.exclude_keys = exclude_keys.to_vec();
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DigestConfigError {
    #[error("read digest config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("digest config parse failed: {0}")]
    Parse(String),
    #[error("digest config validation failed: {}", join_issues(.0))]
    Validation(Vec<StructuredIssue>),
}

fn join_issues(issues: &[StructuredIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn load_digest_config(path: &Path) -> Result<DigestConfig, DigestConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| DigestConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let expanded = expand_env_placeholders(raw.as_str()).map_err(DigestConfigError::Parse)?;
    let config: DigestConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(expanded.as_str())
            .map_err(|error| DigestConfigError::Parse(format!("json decode error: {error}")))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(expanded.as_str())
            .map_err(|error| DigestConfigError::Parse(format!("yaml decode error: {error}")))?,
        _ => serde_yaml::from_str(expanded.as_str())
            .or_else(|_| serde_json::from_str(expanded.as_str()))
            .map_err(|error| DigestConfigError::Parse(error.to_string()))?,
    };

    let mut issues = validate_digest_config(&config);
    StructuredIssue::sort_stable(&mut issues);
    if !issues.is_empty() {
        return Err(DigestConfigError::Validation(issues));
    }
    tracing::debug!(
        path = %path.display(),
        include = config.include_keys.len(),
        exclude = config.exclude_keys.len(),
        "loaded digest config"
    );
    Ok(config)
}

pub fn validate_digest_config(config: &DigestConfig) -> Vec<StructuredIssue> {
    let mut issues = Vec::<StructuredIssue>::new();
    if config.schema != DIGEST_CONFIG_SCHEMA {
        issues.push(config_issue(
            "digest.config.schema",
            vec![FieldPathSegment::Key("schema".to_string())],
            format!(
                "unsupported digest config schema `{}` (expected `{DIGEST_CONFIG_SCHEMA}`)",
                config.schema
            ),
        ));
    }
    if !config.include_keys.is_empty() && !config.exclude_keys.is_empty() {
        issues.push(config_issue(
            "digest.config.filters",
            vec![FieldPathSegment::Key("include_keys".to_string())],
            "include_keys and exclude_keys are mutually exclusive".to_string(),
        ));
    }
    for (field, keys) in [
        ("include_keys", &config.include_keys),
        ("exclude_keys", &config.exclude_keys),
    ] {
        for (index, key) in keys.iter().enumerate() {
            if key.is_empty() {
                issues.push(config_issue(
                    "digest.config.key.empty",
                    vec![
                        FieldPathSegment::Key(field.to_string()),
                        FieldPathSegment::Index(index),
                    ],
                    format!("{field} entries must be non-empty"),
                ));
            }
        }
    }
    issues
}

fn config_issue(reference: &str, path: Vec<FieldPathSegment>, message: String) -> StructuredIssue {
    StructuredIssue::error("digest_config_error", FieldPath::from_segments(path), message, reference)
}

fn default_digest_schema() -> String {
    DIGEST_CONFIG_SCHEMA.to_string()
}

fn expand_env_placeholders(input: &str) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    while let Some(start_offset) = input[cursor..].find("${") {
        let start = cursor + start_offset;
        out.push_str(&input[cursor..start]);
        let var_start = start + 2;
        let Some(end_offset) = input[var_start..].find('}') else {
            return Err("unterminated env placeholder `${...`".to_string());
        };
        let end = var_start + end_offset;
        let key = &input[var_start..end];
        if key.is_empty() {
            return Err("empty env placeholder `${}`".to_string());
        }
        let value = std::env::var(key)
            .map_err(|_| format!("missing env var for placeholder `${{{key}}}`"))?;
        out.push_str(value.as_str());
        cursor = end + 1;
    }
    out.push_str(&input[cursor..]);
    Ok(out)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
