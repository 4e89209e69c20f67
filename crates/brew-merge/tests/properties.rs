//! Property tests for coercion and ordering.

use brew_merge::{SortStrategy, coerce_value, normalize_key};
use brew_model::{FieldValue, Record};
use proptest::prelude::*;

fn code_record(code: &str) -> Record {
    let mut record = Record::new();
    record.insert("code", FieldValue::Text(code.to_string()));
    record
}

proptest! {
    #[test]
    fn range_cells_become_integer_pairs(low in 0i64..10_000, high in 0i64..10_000) {
        let value = coerce_value("FOO_RANGE", &format!("{low}-{high}"));
        prop_assert_eq!(value, Some(FieldValue::Range(vec![low, high])));
    }

    #[test]
    fn range_suffix_is_stripped(base in "[a-z]{1,8}") {
        let header = format!("{}_RANGE", base.to_uppercase());
        prop_assert_eq!(normalize_key(&header), base);
    }

    #[test]
    fn alias_cells_split_in_order(items in prop::collection::vec("[A-Za-z0-9 ]{1,6}", 1..5)) {
        let value = coerce_value("ALIASES", &items.join(";"));
        prop_assert_eq!(value, Some(FieldValue::List(items)));
    }

    #[test]
    fn code_sort_is_non_decreasing(codes in prop::collection::vec("[0-9]{1,3}[A-C]?", 0..20)) {
        let mut records: Vec<Record> = codes.iter().map(|c| code_record(c)).collect();
        SortStrategy::for_first(records.first()).apply(&mut records);

        let keys: Vec<(i64, String)> = records
            .iter()
            .map(|r| {
                let code = r.get("code").unwrap();
                (code.as_integer(), code.as_text())
            })
            .collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
