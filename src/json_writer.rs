use std::fs;
use std::path::Path;

use crate::document::Document;
use crate::error::{Error, Result};

/// Write a document as pretty JSON.
///
/// Uses 2-space indentation, keeps non-ASCII characters literal, and adds a
/// trailing newline. Parent directories are created if they don't exist.
pub fn write_document(path: &Path, doc: &Document) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = doc.to_json_pretty().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    fs::write(path, format!("{}\n", content)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
