//! Metadata queries
//!
//! Existence checks backed by a single stat call per query.
//! Every failure cause (missing path, permission denied, path too long)
//! collapses to `false`.

use std::fs;

/// Check if `path` names an existing directory
pub fn directory_exists(path: &str) -> bool {
    match fs::metadata(path) {
        Ok(info) => info.is_dir(),
        Err(_) => false,
    }
}

/// Check if `path` names an existing regular file
pub fn file_exists(path: &str) -> bool {
    match fs::metadata(path) {
        Ok(info) => info.is_file(),
        Err(_) => false,
    }
}
