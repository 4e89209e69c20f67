//! Field checks.
//!
//! Each check takes the raw cell (`None` when the column is absent) and
//! returns the violation it finds.

pub mod inclusion;
pub mod presence;
pub mod range;
