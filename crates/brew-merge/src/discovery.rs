//! Source file discovery.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{MergeError, Result};
use crate::options::MergeOptions;

/// How a discovered file is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// JSON array of records, appended as-is.
    Json,
    /// CSV table, one record per row.
    Csv,
    /// Documentation or other skipped file.
    Ignored,
}

/// A classified file under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: SourceKind,
}

/// Lists every file under `root`, sorted lexicographically by full path.
///
/// Hidden entries (names starting with `.`) are skipped.
pub fn list_source_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(MergeError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry.map_err(|e| MergeError::Walk {
            path: root.to_path_buf(),
            source: e,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    // Byte order of the whole path, so "a.csv" sorts before "a/b.csv"
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    Ok(files)
}

/// Lists and classifies every file under `root`.
///
/// Fails on the first file with an unrecognized extension, before any
/// file content is read.
pub fn discover_sources(root: &Path, options: &MergeOptions) -> Result<Vec<SourceFile>> {
    list_source_files(root)?
        .into_iter()
        .map(|path| {
            let kind = classify(&path, options)?;
            Ok(SourceFile { path, kind })
        })
        .collect()
}

/// Classifies a file by extension.
pub fn classify(path: &Path, options: &MergeOptions) -> Result<SourceKind> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension.eq_ignore_ascii_case("json") {
        Ok(SourceKind::Json)
    } else if extension.eq_ignore_ascii_case("csv") {
        Ok(SourceKind::Csv)
    } else if !extension.is_empty() && options.is_ignored(extension) {
        Ok(SourceKind::Ignored)
    } else {
        Err(MergeError::UnknownFileType {
            path: path.to_path_buf(),
        })
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
