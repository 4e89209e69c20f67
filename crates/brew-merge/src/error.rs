//! Error types for source merging.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a merge. No artifact is written when one occurs.
#[derive(Debug, Error)]
pub enum MergeError {
    // === File System Errors ===
    /// Source root does not exist or is not a directory.
    #[error("source root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Failed to walk the source tree.
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Failed to read a source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not one the merger knows how to handle.
    #[error("unknown file type {path}")]
    UnknownFileType { path: PathBuf },

    // === Malformed Input ===
    /// CSV reader failed on a header or row.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON source is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Source parsed but does not have the expected shape.
    #[error("unexpected content in {path}: {reason}")]
    UnexpectedShape { path: PathBuf, reason: String },

    // === Output Errors ===
    /// Failed to serialize or write the artifact.
    #[error("failed to write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MergeError {
    /// True when the failure came from the content of a source file.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            MergeError::CsvParse { .. }
                | MergeError::JsonParse { .. }
                | MergeError::UnexpectedShape { .. }
        )
    }
}

/// Result type for merge operations.
pub type Result<T> = std::result::Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MergeError::UnknownFileType {
            path: PathBuf::from("data/hops/data.xyz"),
        };
        assert_eq!(err.to_string(), "unknown file type data/hops/data.xyz");
        assert!(!err.is_malformed_input());
    }

    #[test]
    fn test_malformed_input_classification() {
        let err = MergeError::UnexpectedShape {
            path: PathBuf::from("extra.json"),
            reason: "expected an array".to_string(),
        };
        assert!(err.is_malformed_input());
    }
}
