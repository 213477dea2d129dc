//! Reading the skill file from disk.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors when loading the skill file under validation.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("skill file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the full contents of the skill file.
///
/// The file handle is released as soon as the content is in memory; nothing
/// is held open across the checks.
pub fn read_skill(path: &Path) -> Result<String, FsError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
        io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
        _ => FsError::Io {
            path: path.into(),
            source: e,
        },
    })
}
