//! Ingredient source merging.
//!
//! This crate walks a tree of ingredient sources and merges them into one
//! canonical, sorted JSON artifact.
//!
//! # Features
//!
//! - **Discovery**: every file under the root, in lexicographic path order
//! - **CSV**: one record per row, camelCase keys, typed values
//! - **JSON**: arrays of objects appended as-is
//! - **Sorting**: one [`SortStrategy`] chosen from the first record
//!
//! # Example
//!
//! ```ignore
//! use brew_merge::Merger;
//!
//! let merger = Merger::new("data/hops")?;
//! merger.build("dist/hops.json")?;
//! ```

mod csv_source;
mod discovery;
mod error;
mod field;
mod json_source;
mod merger;
mod options;
mod sort;
mod writer;

// === Error Types ===
pub use error::{MergeError, Result};

// === Discovery ===
pub use discovery::{SourceFile, SourceKind, classify, discover_sources, list_source_files};

// === Source Readers ===
pub use csv_source::read_csv_records;
pub use field::{coerce_scalar, coerce_value, normalize_key};
pub use json_source::read_json_records;

// === Pipeline ===
pub use merger::{Merger, merge_tree};
pub use options::MergeOptions;
pub use sort::SortStrategy;
pub use writer::{render_artifact, write_artifact};
