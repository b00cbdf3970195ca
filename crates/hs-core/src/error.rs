use std::path::PathBuf;

use crate::validate::{IssueKind, ValidationIssue};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading or validating tables.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A table file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A table source is not valid JSON or does not match the table schema.
    #[error("schema violation in {table}: {source}")]
    Malformed {
        /// Which table was being parsed (e.g. `races`).
        table: &'static str,
        /// The parser error, with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The tables parsed but break a structural rule (weights, names, sizes).
    #[error("schema violation: {}", summarize(.0))]
    SchemaViolation(Vec<ValidationIssue>),

    /// An affinity map names an entity missing from its target table.
    #[error("referential integrity violation: {}", summarize(.0))]
    ReferentialIntegrity(Vec<ValidationIssue>),
}

impl CoreError {
    /// All validation issues carried by this error, if any.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::SchemaViolation(issues) | Self::ReferentialIntegrity(issues) => issues,
            Self::Io { .. } | Self::Malformed { .. } => &[],
        }
    }

    /// Build the error for a failed validation run, or `None` if every
    /// issue is a warning. Schema problems take precedence over dangling
    /// references.
    pub(crate) fn from_issues(issues: Vec<ValidationIssue>) -> Option<Self> {
        if issues.iter().any(|i| i.kind == IssueKind::Schema) {
            Some(Self::SchemaViolation(issues))
        } else if issues.iter().any(|i| i.kind == IssueKind::Reference) {
            Some(Self::ReferentialIntegrity(issues))
        } else {
            None
        }
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    let mut errors = issues.iter().filter(|i| i.is_error());
    match (errors.next(), errors.count()) {
        (Some(first), 0) => format!("{}: {}", first.entity, first.message),
        (Some(first), more) => format!(
            "{}: {} (and {more} more error{})",
            first.entity,
            first.message,
            if more == 1 { "" } else { "s" }
        ),
        (None, _) => "no errors".to_string(),
    }
}
