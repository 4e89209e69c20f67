//! File-level validation driver.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::{debug, info_span};

use brew_model::Category;

use crate::error::{FailureKind, Result, ValidationError};
use crate::row::Row;
use crate::rules::rules_for;

/// Outcome of a file that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSummary {
    pub path: PathBuf,
    pub category: Category,
    /// Number of data rows checked (header excluded).
    pub rows: usize,
}

/// Validates one CSV file against the rules of `category`.
///
/// Stops at the first failure. Failures that happen before the header is
/// read (opening the file) are reported at line 0.
pub fn validate_file(path: &Path, category: Category) -> Result<ValidationSummary> {
    let span = info_span!("validate", path = %path.display(), category = %category);
    let _guard = span.enter();

    let file = File::open(path).map_err(|e| unexpected(path, 0, &e))?;
    let summary = validate_reader(path, file, category)?;

    debug!(rows = summary.rows, "file valid");
    Ok(summary)
}

/// Validates CSV content from any reader; `path` is only used for reporting.
pub fn validate_reader<R: Read>(
    path: &Path,
    reader: R,
    category: Category,
) -> Result<ValidationSummary> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv.headers().map_err(|e| unexpected(path, 1, &e))?.clone();
    let rules = rules_for(category);

    let mut rows = 0usize;
    let mut last_line = 1;
    for result in csv.records() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(last_line + 1, csv::Position::line);
            unexpected(path, line, &e)
        })?;
        // Blank lines are skipped by the reader but still count.
        let line = record.position().map_or(last_line + 1, csv::Position::line);
        last_line = line;

        if record.len() != headers.len() {
            return Err(ValidationError::new(
                path,
                line,
                FailureKind::ColumnCountMismatch {
                    found: record.len(),
                    expected: headers.len(),
                },
            ));
        }

        let row = Row::new(&headers, &record);
        for rule in rules {
            rule.evaluate(&row)
                .map_err(|violation| ValidationError::new(path, line, violation))?;
        }
        rows += 1;
    }

    Ok(ValidationSummary {
        path: path.to_path_buf(),
        category,
        rows,
    })
}

fn unexpected(path: &Path, line: u64, err: &dyn std::error::Error) -> ValidationError {
    ValidationError::new(
        path,
        line,
        FailureKind::Unexpected {
            message: err.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violation::Violation;

    fn validate_str(content: &str, category: Category) -> Result<ValidationSummary> {
        validate_reader(Path::new("test.csv"), content.as_bytes(), category)
    }

    #[test]
    fn test_valid_hops() {
        let summary = validate_str(
            "NAME,ORIGIN,ALPHA\nCascade,USA,5.5\nSaaz,Czech Republic,3.5\n",
            Category::Hop,
        )
        .unwrap();
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.category, Category::Hop);
    }

    #[test]
    fn test_header_only() {
        let summary = validate_str("NAME,ORIGIN,ALPHA\n", Category::Hop).unwrap();
        assert_eq!(summary.rows, 0);
    }

    #[test]
    fn test_first_failing_row_wins() {
        let err = validate_str(
            "NAME,ORIGIN,ALPHA\nCascade,USA,5.5\n,Atlantis,\n,,\n",
            Category::Hop,
        )
        .unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(
            err.violation(),
            Some(&Violation::Blank {
                field: "name".into()
            })
        );
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let err = validate_str(
            "NAME,ORIGIN,ALPHA\nCascade,USA,5.5\n\nPoseidon,Atlantis,9\n",
            Category::Hop,
        )
        .unwrap_err();
        assert_eq!(err.line, 4);
        assert_eq!(
            err.to_string(),
            r#"test.csv:4 origin "Atlantis" is not allowed"#
        );
    }

    #[test]
    fn test_quoted_newline_reports_row_start() {
        let err = validate_str(
            "NAME,ORIGIN,ALPHA\n\"Cascade\nLeaf\",USA,5.5\n,USA,4\n",
            Category::Hop,
        )
        .unwrap_err();
        assert_eq!(err.line, 4);
    }

    #[test]
    fn test_missing_column_counts_as_blank() {
        let err = validate_str("NAME,ORIGIN\nCascade,USA\n", Category::Hop).unwrap_err();
        assert_eq!(err.to_string(), "test.csv:2 alpha must not be blank");
    }

    #[test]
    fn test_invalid_utf8_is_unexpected() {
        let bytes: &[u8] = b"NAME,ORIGIN,ALPHA\n\xff\xfe,USA,5\n";
        let err = validate_reader(Path::new("bad.csv"), bytes, Category::Hop).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, FailureKind::Unexpected { .. }));
        assert!(err.to_string().starts_with("bad.csv:2 "));
    }

    #[test]
    fn test_missing_file_is_unexpected() {
        let err = validate_file(Path::new("does/not/exist/hops.csv"), Category::Hop).unwrap_err();
        assert_eq!(err.line, 0);
        assert!(matches!(err.kind, FailureKind::Unexpected { .. }));
    }
}
