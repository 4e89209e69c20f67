//! Ingredient CSV validation.
//!
//! Each category has a fixed table of row rules:
//!
//! - **Structure**: every data row has as many columns as the header
//! - **Presence**: required cells are non-empty
//! - **Inclusion**: origins and types come from fixed sets
//! - **Range**: yeast `min-max` cells are ordered and within bounds
//!
//! Validation is fail-fast: the first violation stops the run and is
//! reported as `<file>:<line> <reason>`.
//!
//! # Example
//!
//! ```ignore
//! use brew_model::Category;
//! use brew_validate::validate_file;
//!
//! let path = Path::new("data/yeasts/fermentis.csv");
//! let category = Category::from_csv_path(path)?;
//! validate_file(path, category)?;
//! ```

mod checks;
mod error;
mod row;
pub mod rules;
mod validator;
mod violation;

pub use error::{FailureKind, Result, ValidationError};
pub use row::Row;
pub use rules::{Check, Condition, FieldRule, rules_for};
pub use validator::{ValidationSummary, validate_file, validate_reader};
pub use violation::Violation;
