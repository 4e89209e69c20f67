//! `min-max` range checks.

use crate::violation::Violation;

/// Validates a `min-max` cell against inclusive bounds.
///
/// Checked in order: exactly two values, both integers, min <= max, then
/// each bound within `[lower, upper]`.
pub fn check(field: &str, value: Option<&str>, lower: i64, upper: i64) -> Result<(), Violation> {
    let tokens = split_range(value.unwrap_or_default());
    if tokens.len() != 2 {
        return Err(Violation::RangeArity {
            field: field.to_string(),
            count: tokens.len(),
        });
    }

    let min = parse_bound(field, tokens[0])?;
    let max = parse_bound(field, tokens[1])?;
    if min > max {
        return Err(Violation::RangeInverted {
            field: field.to_string(),
        });
    }

    for bound in [min, max] {
        if bound < lower || bound > upper {
            return Err(Violation::RangeOutOfBounds {
                field: field.to_string(),
                value: bound,
                min: lower,
                max: upper,
            });
        }
    }
    Ok(())
}

/// Splits on `-`, dropping trailing empty pieces.
fn split_range(value: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = value.split('-').collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

fn parse_bound(field: &str, token: &str) -> Result<i64, Violation> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| Violation::RangeNotInteger {
            field: field.to_string(),
            token: token.to_string(),
        })
}
