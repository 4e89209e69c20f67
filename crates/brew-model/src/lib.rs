//! Shared data model for brewing ingredient sources.
//!
//! - [`Record`]: one normalized ingredient, an ordered field map
//! - [`FieldValue`]: the tagged union of coerced cell values
//! - [`Category`]: fermentable, hop or yeast, with directory-name inference

pub mod category;
pub mod error;
pub mod record;
pub mod value;

pub use category::Category;
pub use error::{ModelError, Result};
pub use record::Record;
pub use value::{FieldValue, leading_integer};
