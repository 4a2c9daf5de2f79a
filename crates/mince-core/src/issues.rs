use crate::field_path::FieldPath;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredIssue {
    pub kind: String,
    pub severity: IssueSeverity,
    pub field_path: FieldPath,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl StructuredIssue {
    pub fn error(kind: &str, field_path: FieldPath, message: impl Into<String>, reference: &str) -> Self {
        Self {
            kind: kind.to_string(),
            severity: IssueSeverity::Error,
            field_path,
            message: message.into(),
            reference: Some(reference.to_string()),
        }
    }

    pub fn sort_stable(issues: &mut [Self]) {
        issues.sort_by(|left, right| {
            (left.severity, &left.kind, &left.field_path, &left.message).cmp(&(
                right.severity,
                &right.kind,
                &right.field_path,
                &right.message,
            ))
        });
    }
}

impl Display for StructuredIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)?;
        if let Some(reference) = &self.reference {
            write!(f, " [{reference}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "issues_test.rs"]
mod tests;
