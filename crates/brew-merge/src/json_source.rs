//! JSON sources: an array of records kept as-is.

use std::path::Path;

use brew_model::Record;

use crate::error::{MergeError, Result};

/// Reads a JSON array of objects. Elements are not renamed or coerced.
pub fn read_json_records(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path).map_err(|e| MergeError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| MergeError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let serde_json::Value::Array(elements) = document else {
        return Err(MergeError::UnexpectedShape {
            path: path.to_path_buf(),
            reason: "expected a JSON array of objects".to_string(),
        });
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(idx, element)| match element {
            serde_json::Value::Object(object) => Ok(Record::from_json_object(object)),
            other => Err(MergeError::UnexpectedShape {
                path: path.to_path_buf(),
                reason: format!("element {idx} is not an object: {other}"),
            }),
        })
        .collect()
}
