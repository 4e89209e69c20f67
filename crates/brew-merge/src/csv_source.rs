//! CSV sources: one record per data row.

use std::path::Path;

use csv::ReaderBuilder;

use brew_model::Record;

use crate::error::{MergeError, Result};
use crate::field::{coerce_value, normalize_key};

/// Reads every data row of a CSV file into a record.
///
/// Short rows leave the trailing fields absent. A row with more cells than
/// the header has no key for the extra cells and is rejected.
pub fn read_csv_records(path: &Path) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| MergeError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers = reader
        .headers()
        .map_err(|e| MergeError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();
    let keys: Vec<String> = headers.iter().map(normalize_key).collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| MergeError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        if row.len() > headers.len() {
            let line = row.position().map_or(0, csv::Position::line);
            return Err(MergeError::UnexpectedShape {
                path: path.to_path_buf(),
                reason: format!(
                    "line {line} has {} cells but only {} headers",
                    row.len(),
                    headers.len()
                ),
            });
        }

        let record: Record = headers
            .iter()
            .zip(keys.iter())
            .zip(row.iter())
            .filter_map(|((header, key), raw)| {
                coerce_value(header, raw).map(|value| (key.clone(), value))
            })
            .collect();
        records.push(record);
    }

    Ok(records)
}
