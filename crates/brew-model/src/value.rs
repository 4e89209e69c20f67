//! Coerced field values.

use serde::{Serialize, Serializer};
use std::fmt;

/// A single record field after coercion.
///
/// CSV cells land in one of the first five variants; elements read from
/// JSON sources keep their original shape in [`FieldValue::Json`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    /// Always finite.
    Float(f64),
    Text(String),
    /// Semicolon-separated list cell (`aliases`).
    List(Vec<String>),
    /// Dash-separated `min-max` cell; normally two elements.
    Range(Vec<i64>),
    Json(serde_json::Value),
}

impl FieldValue {
    /// Integer view of the value, truncating floats and reading the
    /// leading digits of text. Values without a numeric reading are 0.
    pub fn as_integer(&self) -> i64 {
        match self {
            FieldValue::Integer(v) => *v,
            FieldValue::Float(v) => *v as i64,
            FieldValue::Text(s) => leading_integer(s),
            FieldValue::Json(serde_json::Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
            FieldValue::Json(serde_json::Value::String(s)) => leading_integer(s),
            _ => 0,
        }
    }

    /// Text view of the value, used for sort keys.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Json(serde_json::Value::String(s)) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::List(items) => write!(f, "{}", items.join(";")),
            FieldValue::Range(bounds) => {
                let parts: Vec<String> = bounds.iter().map(i64::to_string).collect();
                write!(f, "{}", parts.join("-"))
            }
            FieldValue::Json(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Integer(v) => serializer.serialize_i64(*v),
            FieldValue::Float(v) => serializer.serialize_f64(*v),
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::List(items) => items.serialize(serializer),
            FieldValue::Range(bounds) => bounds.serialize(serializer),
            FieldValue::Json(value) => value.serialize(serializer),
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::Json(value)
    }
}

/// Reads the leading integer of a string, ignoring anything after it.
///
/// Leading whitespace and a single sign are accepted. Strings without a
/// leading digit read as 0; values beyond `i64` saturate.
pub fn leading_integer(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut result: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        result = result.saturating_mul(10).saturating_add(digit);
    }
    if negative { -result } else { result }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("42"), 42);
        assert_eq!(leading_integer("  7 "), 7);
        assert_eq!(leading_integer("-3"), -3);
        assert_eq!(leading_integer("+12abc"), 12);
        assert_eq!(leading_integer("12A"), 12);
        assert_eq!(leading_integer("abc"), 0);
        assert_eq!(leading_integer(""), 0);
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(FieldValue::Integer(5).as_integer(), 5);
        assert_eq!(FieldValue::Float(5.9).as_integer(), 5);
        assert_eq!(FieldValue::Text("101B".into()).as_integer(), 101);
        assert_eq!(FieldValue::Json(serde_json::json!(8)).as_integer(), 8);
        assert_eq!(FieldValue::Json(serde_json::json!("9x")).as_integer(), 9);
        assert_eq!(FieldValue::List(vec!["1".into()]).as_integer(), 0);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::Text("Ale".into()).as_text(), "Ale");
        assert_eq!(FieldValue::Integer(10).as_text(), "10");
        assert_eq!(FieldValue::Json(serde_json::json!("Lager")).as_text(), "Lager");
        assert_eq!(FieldValue::Range(vec![3, 7]).as_text(), "3-7");
    }

    #[test]
    fn test_serialize_variants() {
        let values = vec![
            FieldValue::Integer(3),
            FieldValue::Float(1.5),
            FieldValue::Text("Cascade".into()),
            FieldValue::List(vec!["a".into(), "b".into()]),
            FieldValue::Range(vec![18, 22]),
            FieldValue::Json(serde_json::json!({"nested": true})),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(
            json,
            r#"[3,1.5,"Cascade",["a","b"],[18,22],{"nested":true}]"#
        );
    }
}
