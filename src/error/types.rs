//! Error types
//!
//! Defines domain-specific error types for the filesystem utilities.

use std::fmt;
use std::io;

/// Filesystem operation errors
#[derive(Debug)]
pub enum FsError {
    EmptyPath,
    NotFound(String),
    PermissionDenied(String),
    NotADirectory(String),
    AlreadyExists(String),
    DirectoryNotEmpty(String),
    IoError(io::Error),
}

impl FsError {
    /// Classify an OS error against the path that produced it
    pub fn from_io(path: &str, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_string()),
            io::ErrorKind::NotADirectory => FsError::NotADirectory(path.to_string()),
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_string()),
            io::ErrorKind::DirectoryNotEmpty => FsError::DirectoryNotEmpty(path.to_string()),
            _ => FsError::IoError(error),
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::EmptyPath => write!(f, "Empty path provided"),
            FsError::NotFound(p) => write!(f, "Path not found: {}", p),
            FsError::PermissionDenied(p) => write!(f, "Permission denied: {}", p),
            FsError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            FsError::AlreadyExists(p) => write!(f, "Already exists: {}", p),
            FsError::DirectoryNotEmpty(p) => write!(f, "Directory not empty: {}", p),
            FsError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for FsError {}

impl From<io::Error> for FsError {
    fn from(error: io::Error) -> Self {
        FsError::IoError(error)
    }
}
