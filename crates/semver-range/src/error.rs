//! Error type for range parsing

use thiserror::Error;

/// Error returned when a range expression cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid comparator \"{0}\"")]
    InvalidComparator(String),
    #[error("Malformed term \"{0}\"")]
    MalformedTerm(String),
    #[error("Empty range")]
    EmptyRange,
    #[error("Empty clause in range \"{0}\"")]
    EmptyClause(String),
    #[error("Invalid version \"{version}\": {reason}")]
    InvalidVersion { version: String, reason: String },
}

impl RangeError {
    pub(crate) fn invalid_version(version: &str, reason: impl Into<String>) -> Self {
        RangeError::InvalidVersion {
            version: version.to_string(),
            reason: reason.into(),
        }
    }
}
