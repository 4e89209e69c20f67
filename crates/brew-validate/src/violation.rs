//! Field rule violations.
//!
//! Each variant carries only the data its message needs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed field rule.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Violation {
    // Presence
    /// Value is absent or empty.
    #[error("{field} must not be blank")]
    Blank { field: String },

    // Inclusion
    /// Value is not a member of the allowed set.
    #[error("{field} {value:?} is not allowed")]
    NotAllowed { field: String, value: String },

    // Range
    /// Range cell does not split into exactly two values.
    #[error("{field} contains {count} values")]
    RangeArity { field: String, count: usize },

    /// Range bound is not an integer.
    #[error("{field} {token:?} is not an integer")]
    RangeNotInteger { field: String, token: String },

    /// Lower bound exceeds upper bound.
    #[error("{field} minimum > maximum")]
    RangeInverted { field: String },

    /// A bound lies outside the inclusive limits.
    #[error("{field} {value} not in {min}..{max}")]
    RangeOutOfBounds {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl Violation {
    /// Field label (all violations have one).
    pub fn field(&self) -> &str {
        match self {
            Violation::Blank { field }
            | Violation::NotAllowed { field, .. }
            | Violation::RangeArity { field, .. }
            | Violation::RangeNotInteger { field, .. }
            | Violation::RangeInverted { field }
            | Violation::RangeOutOfBounds { field, .. } => field,
        }
    }
}
