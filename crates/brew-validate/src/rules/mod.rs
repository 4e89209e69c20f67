//! Per-category field rules.
//!
//! Rule sets are static tables evaluated top to bottom; the first failing
//! rule for a row is reported.

mod catalog;
mod rule;
mod sets;

pub use catalog::rules_for;
pub use rule::{Check, Condition, FieldRule};
pub use sets::{FERMENTABLE_GRAIN_TYPES, FERMENTABLE_TYPES, ORIGINS, YEAST_TYPES};
