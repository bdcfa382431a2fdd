//! Mutating directory operations
//!
//! Single-attempt, non-recursive directory creation and removal. Neither
//! operation retries, creates missing parents, or deletes contents.

use log::warn;
use std::fs;

use crate::error::FsError;

/// Create a directory at `path` with the OS failure cause surfaced.
///
/// Not recursive: fails if the parent does not exist. On Unix the
/// directory is created with owner-only read/write/execute permissions.
pub fn try_make_directory(path: &str) -> Result<(), FsError> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(path).map_err(|e| {
        warn!("Failed to create directory {}: {}", path, e);
        FsError::from_io(path, e)
    })
}

/// Create a directory at `path`.
///
/// Returns true iff creation succeeded. Creation on an existing
/// directory fails, so repeated calls are not idempotent.
pub fn make_directory(path: &str) -> bool {
    try_make_directory(path).is_ok()
}

/// Remove the directory at `path` with the OS failure cause surfaced.
///
/// Not recursive: fails if the directory is non-empty, missing, or not
/// a directory.
pub fn try_delete_directory(path: &str) -> Result<(), FsError> {
    fs::remove_dir(path).map_err(|e| {
        warn!("Failed to remove directory {}: {}", path, e);
        FsError::from_io(path, e)
    })
}

/// Remove the directory at `path`, returning true iff removal succeeded
pub fn delete_directory(path: &str) -> bool {
    try_delete_directory(path).is_ok()
}
