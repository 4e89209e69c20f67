//! CSV header normalization and cell coercion.
//!
//! Headers such as `GRAIN_TYPE` or `ATTENUATION_RANGE` become camelCase
//! record keys (`grainType`, `attenuation`). Cells are coerced by an ordered
//! attempt chain: list and range conventions first, then integer, float and
//! finally the raw text.

use brew_model::{FieldValue, leading_integer};

const RANGE_SUFFIX: &str = "_range";
const LIST_HEADER: &str = "aliases";

/// Converts a raw CSV header into a record key.
pub fn normalize_key(header: &str) -> String {
    let lowered = header.to_lowercase();
    let base = lowered.strip_suffix(RANGE_SUFFIX).unwrap_or(&lowered);
    camel_case(base)
}

/// Coerces a raw cell. Returns `None` for empty cells, which are omitted.
///
/// `header` is matched case-insensitively against the list and range
/// conventions.
pub fn coerce_value(header: &str, raw: &str) -> Option<FieldValue> {
    if raw.is_empty() {
        return None;
    }
    let header = header.to_lowercase();

    if header == LIST_HEADER {
        let items = split_keep_inner(raw, ';')
            .into_iter()
            .map(str::to_string)
            .collect();
        return Some(FieldValue::List(items));
    }

    if header.ends_with(RANGE_SUFFIX) {
        let bounds = split_keep_inner(raw, '-')
            .into_iter()
            .map(leading_integer)
            .collect();
        return Some(FieldValue::Range(bounds));
    }

    Some(coerce_scalar(raw))
}

/// Integer, then finite float, then the original text.
///
/// Digit strings outside the `i64` range stay text so they are not rounded.
pub fn coerce_scalar(raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return FieldValue::Integer(value);
    }
    if is_integral(trimmed) {
        return FieldValue::Text(raw.to_string());
    }
    if let Ok(value) = trimmed.parse::<f64>()
        && value.is_finite()
    {
        return FieldValue::Float(value);
    }
    FieldValue::Text(raw.to_string())
}

fn is_integral(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// Lower camel case from a snake_case name: `grain_type` -> `grainType`.
fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    for (idx, part) in snake.split('_').enumerate() {
        if idx == 0 {
            out.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Splits on `sep`, dropping trailing empty pieces.
fn split_keep_inner(value: &str, sep: char) -> Vec<&str> {
    let mut parts: Vec<&str> = value.split(sep).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("NAME"), "name");
        assert_eq!(normalize_key("GRAIN_TYPE"), "grainType");
        assert_eq!(normalize_key("ATTENUATION_RANGE"), "attenuation");
        assert_eq!(normalize_key("temperature_range"), "temperature");
        assert_eq!(normalize_key("ALPHA_ACID_MIN"), "alphaAcidMin");
        assert_eq!(normalize_key("RANGE_LOW"), "rangeLow");
    }

    #[test]
    fn test_coerce_empty_is_omitted() {
        assert_eq!(coerce_value("NAME", ""), None);
        assert_eq!(coerce_value("ALIASES", ""), None);
    }

    #[test]
    fn test_coerce_aliases() {
        assert_eq!(
            coerce_value("ALIASES", "a;b;c"),
            Some(FieldValue::List(vec!["a".into(), "b".into(), "c".into()]))
        );
        assert_eq!(
            coerce_value("aliases", "a; b;"),
            Some(FieldValue::List(vec!["a".into(), " b".into()]))
        );
    }

    #[test]
    fn test_coerce_range() {
        assert_eq!(
            coerce_value("ATTENUATION_RANGE", "3-7"),
            Some(FieldValue::Range(vec![3, 7]))
        );
        assert_eq!(
            coerce_value("TEMPERATURE_RANGE", "18"),
            Some(FieldValue::Range(vec![18]))
        );
        assert_eq!(
            coerce_value("TEMPERATURE_RANGE", "1-2-3"),
            Some(FieldValue::Range(vec![1, 2, 3]))
        );
    }

    #[test]
    fn test_coerce_scalar_chain() {
        assert_eq!(coerce_scalar("42"), FieldValue::Integer(42));
        assert_eq!(coerce_scalar(" 42 "), FieldValue::Integer(42));
        assert_eq!(coerce_scalar("1.038"), FieldValue::Float(1.038));
        assert_eq!(coerce_scalar("Cascade"), FieldValue::Text("Cascade".into()));
        assert_eq!(coerce_scalar("inf"), FieldValue::Text("inf".into()));
        assert_eq!(coerce_scalar("NaN"), FieldValue::Text("NaN".into()));
        assert_eq!(coerce_scalar("12A"), FieldValue::Text("12A".into()));
    }

    #[test]
    fn test_coerce_over_range_integer_stays_text() {
        assert_eq!(
            coerce_scalar("12345678901234567890"),
            FieldValue::Text("12345678901234567890".into())
        );
        assert_eq!(
            coerce_scalar("-99999999999999999999"),
            FieldValue::Text("-99999999999999999999".into())
        );
        assert_eq!(
            coerce_scalar("9223372036854775807"),
            FieldValue::Integer(i64::MAX)
        );
        assert_eq!(coerce_scalar("1e30"), FieldValue::Float(1e30));
    }
}
