//! Artifact output.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use brew_model::Record;

use crate::error::{MergeError, Result};

/// Serializes records as a JSON array terminated by a newline.
pub fn render_artifact(records: &[Record], pretty: bool) -> serde_json::Result<Vec<u8>> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(records)?
    } else {
        serde_json::to_vec(records)?
    };
    bytes.push(b'\n');
    Ok(bytes)
}

/// Writes the artifact, creating parent directories.
///
/// The content is staged in a temporary file next to `path` and renamed
/// into place.
pub fn write_artifact(path: &Path, records: &[Record], pretty: bool) -> Result<()> {
    let to_write_error = |source: std::io::Error| MergeError::Write {
        path: path.to_path_buf(),
        source,
    };
    let bytes = render_artifact(records, pretty).map_err(|e| to_write_error(e.into()))?;

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(to_write_error)?;

    let mut staged = NamedTempFile::new_in(parent).map_err(to_write_error)?;
    staged.write_all(&bytes).map_err(to_write_error)?;
    staged.flush().map_err(to_write_error)?;
    staged
        .persist(path)
        .map_err(|e| to_write_error(e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "artifact written");
    Ok(())
}
