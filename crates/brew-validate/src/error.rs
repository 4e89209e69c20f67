//! Located validation failures.

use std::path::PathBuf;

use thiserror::Error;

use crate::violation::Violation;

/// What went wrong on the failing line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// Data row width differs from the header width.
    #[error("contains {found} instead of {expected} columns")]
    ColumnCountMismatch { found: usize, expected: usize },

    /// A category field rule failed.
    #[error(transparent)]
    FieldViolation(#[from] Violation),

    /// Any other failure while reading the file.
    #[error("{message}")]
    Unexpected { message: String },
}

/// A validation failure, rendered as `<file>:<line> <reason>`.
///
/// Line 1 is the header row; the first data row is line 2.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}:{} {}", .path.display(), .line, .kind)]
pub struct ValidationError {
    pub path: PathBuf,
    pub line: u64,
    pub kind: FailureKind,
}

impl ValidationError {
    pub fn new(path: impl Into<PathBuf>, line: u64, kind: impl Into<FailureKind>) -> Self {
        Self {
            path: path.into(),
            line,
            kind: kind.into(),
        }
    }

    /// The field violation, if this failure came from a field rule.
    pub fn violation(&self) -> Option<&Violation> {
        match &self.kind {
            FailureKind::FieldViolation(violation) => Some(violation),
            _ => None,
        }
    }
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(
            "data/yeasts/fermentis.csv",
            3,
            FailureKind::ColumnCountMismatch {
                found: 4,
                expected: 5,
            },
        );
        assert_eq!(
            err.to_string(),
            "data/yeasts/fermentis.csv:3 contains 4 instead of 5 columns"
        );
        assert!(err.violation().is_none());
    }

    #[test]
    fn test_error_from_violation() {
        let err = ValidationError::new(
            "hops.csv",
            2,
            Violation::Blank {
                field: "alpha".into(),
            },
        );
        assert_eq!(err.to_string(), "hops.csv:2 alpha must not be blank");
        assert_eq!(err.violation().map(Violation::field), Some("alpha"));
    }
}
