//! Header-keyed view of one CSV data row.

use csv::StringRecord;

/// Looks up cells by their source header (`NAME`, `GRAIN_TYPE`, ...).
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub fn new(headers: &'a StringRecord, record: &'a StringRecord) -> Self {
        Self { headers, record }
    }

    /// Cell under `column`, or `None` when the header is absent.
    ///
    /// With duplicate headers the first one wins.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|header| header == column)?;
        self.record.get(idx)
    }

    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }
}
