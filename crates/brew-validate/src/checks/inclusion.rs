//! Inclusion checks against fixed value sets.

use crate::violation::Violation;

/// Fails when the value is not one of `allowed` (exact, case-sensitive).
pub fn check(field: &str, value: Option<&str>, allowed: &[&str]) -> Result<(), Violation> {
    match value {
        Some(v) if allowed.contains(&v) => Ok(()),
        _ => Err(Violation::NotAllowed {
            field: field.to_string(),
            value: value.unwrap_or_default().to_string(),
        }),
    }
}
