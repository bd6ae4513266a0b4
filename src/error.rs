//! Error types returned by the library.
//!
//! Fatal conditions (missing reference, malformed reference) surface as
//! [`Error`]. Per-file problems that must not abort a run are collected as
//! [`FileWarning`]s inside the reports instead.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("root of {} must be a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound { path }
        } else {
            Error::Io { path, source }
        }
    }

    /// True for errors caused by malformed document content.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::NotAnObject { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A file that was skipped during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWarning {
    pub file_path: String,
    pub error: String,
}

impl FileWarning {
    pub fn new(path: impl Into<PathBuf>, error: impl ToString) -> Self {
        Self {
            file_path: path.into().to_string_lossy().to_string(),
            error: error.to_string(),
        }
    }
}
