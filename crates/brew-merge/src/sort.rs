//! Deterministic ordering of merged records.
//!
//! The dataset is assumed to be shape-homogeneous: the strategy is picked
//! once from the fields of the first record and applied to all of them.

use std::fmt;

use brew_model::{FieldValue, Record};

/// Sort key policy for one merged sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// By (integer value of `code`, text of `code`).
    Code,
    /// By (`type`, `name`).
    TypeThenName,
    /// By `name`.
    Name,
    /// Keep discovery order.
    Insertion,
}

impl SortStrategy {
    /// Selects the strategy from the first record's field set.
    pub fn for_first(first: Option<&Record>) -> Self {
        match first {
            Some(record) if record.contains_key("code") => SortStrategy::Code,
            Some(record) if record.contains_key("type") => SortStrategy::TypeThenName,
            Some(record) if record.contains_key("name") => SortStrategy::Name,
            _ => SortStrategy::Insertion,
        }
    }

    /// Sorts in place. The sort is stable; a missing key field compares as
    /// empty text (and as 0 for codes).
    pub fn apply(self, records: &mut [Record]) {
        match self {
            SortStrategy::Code => records.sort_by_cached_key(|record| {
                record
                    .get("code")
                    .map(|code| (code.as_integer(), code.as_text()))
                    .unwrap_or_default()
            }),
            SortStrategy::TypeThenName => records.sort_by_cached_key(|record| {
                (text_of(record, "type"), text_of(record, "name"))
            }),
            SortStrategy::Name => records.sort_by_cached_key(|record| text_of(record, "name")),
            SortStrategy::Insertion => {}
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Code => "code",
            SortStrategy::TypeThenName => "type, name",
            SortStrategy::Name => "name",
            SortStrategy::Insertion => "insertion",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn text_of(record: &Record, key: &str) -> String {
    record
        .get(key)
        .map(FieldValue::as_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, FieldValue)]) -> Record {
        fields
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(SortStrategy::for_first(None), SortStrategy::Insertion);
        assert_eq!(
            SortStrategy::for_first(Some(&record(&[("code", FieldValue::Integer(1))]))),
            SortStrategy::Code
        );
        assert_eq!(
            SortStrategy::for_first(Some(&record(&[("name", text("a")), ("type", text("Ale"))]))),
            SortStrategy::TypeThenName
        );
        assert_eq!(
            SortStrategy::for_first(Some(&record(&[("name", text("a"))]))),
            SortStrategy::Name
        );
        assert_eq!(
            SortStrategy::for_first(Some(&record(&[("alpha", FieldValue::Float(5.5))]))),
            SortStrategy::Insertion
        );
    }

    #[test]
    fn test_code_sort_numeric_then_text() {
        let mut records = vec![
            record(&[("code", text("12A"))]),
            record(&[("code", FieldValue::Integer(2))]),
            record(&[("code", FieldValue::Integer(12))]),
            record(&[("code", text("12"))]),
        ];
        SortStrategy::Code.apply(&mut records);
        let codes: Vec<String> = records
            .iter()
            .map(|r| r.get("code").unwrap().as_text())
            .collect();
        assert_eq!(codes, vec!["2", "12", "12", "12A"]);
    }

    #[test]
    fn test_type_then_name_sort() {
        let mut records = vec![
            record(&[("name", text("WLP001")), ("type", text("Lager"))]),
            record(&[("name", text("US-05")), ("type", text("Ale"))]),
            record(&[("name", text("S-04")), ("type", text("Ale"))]),
        ];
        SortStrategy::TypeThenName.apply(&mut records);
        let names: Vec<String> = records
            .iter()
            .map(|r| r.get("name").unwrap().as_text())
            .collect();
        assert_eq!(names, vec!["S-04", "US-05", "WLP001"]);
    }

    #[test]
    fn test_missing_name_sorts_as_empty_text() {
        let mut records = vec![
            record(&[("name", text("Saaz"))]),
            record(&[("name", text("")), ("alpha", FieldValue::Integer(1))]),
            record(&[("alpha", FieldValue::Integer(2))]),
            record(&[("name", text("")), ("alpha", FieldValue::Integer(3))]),
        ];
        SortStrategy::Name.apply(&mut records);
        let alphas: Vec<Option<&FieldValue>> = records.iter().map(|r| r.get("alpha")).collect();
        assert_eq!(
            alphas,
            vec![
                Some(&FieldValue::Integer(1)),
                Some(&FieldValue::Integer(2)),
                Some(&FieldValue::Integer(3)),
                None,
            ]
        );
    }

    #[test]
    fn test_insertion_keeps_order() {
        let mut records = vec![
            record(&[("alpha", FieldValue::Integer(2))]),
            record(&[("alpha", FieldValue::Integer(1))]),
        ];
        SortStrategy::Insertion.apply(&mut records);
        assert_eq!(records[0].get("alpha"), Some(&FieldValue::Integer(2)));
    }
}
