//! Presence checks.

use crate::violation::Violation;

/// Fails when the value is absent or empty.
pub fn check(field: &str, value: Option<&str>) -> Result<(), Violation> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(Violation::Blank {
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence() {
        assert!(check("name", Some("Cascade")).is_ok());
        assert!(check("name", Some(" ")).is_ok());
        assert!(check("name", Some("")).is_err());
        assert_eq!(
            check("name", None),
            Err(Violation::Blank {
                field: "name".into()
            })
        );
    }
}
