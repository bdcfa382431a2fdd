//! Directory listing
//!
//! Non-recursive enumeration of the regular files directly inside a
//! directory. Dot-prefixed names are skipped, which also covers the
//! `.` and `..` entries on platforms that report them.

use log::{debug, warn};
use std::fs;

use crate::error::FsError;
use crate::filesystem::extension::get_file_extension_in_lower_case;

/// List the regular files directly under `path`.
///
/// Returned paths are the directory path joined with each entry name, in
/// filesystem-enumeration order. Entries whose metadata lookup fails are
/// skipped rather than failing the whole listing. The directory handle
/// is closed when the iterator drops, on every exit path.
pub fn try_list_files_in_directory(path: &str) -> Result<Vec<String>, FsError> {
    if path.is_empty() {
        return Err(FsError::EmptyPath);
    }

    let entries = fs::read_dir(path).map_err(|e| {
        warn!("Failed to open directory {}: {}", path, e);
        FsError::from_io(path, e)
    })?;

    let mut filenames = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", path, e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let full_path = join_entry_path(path, &name);
        let info = match fs::metadata(&full_path) {
            Ok(info) => info,
            Err(e) => {
                // A vanished or unreadable entry is not fatal to the listing
                debug!("Skipping {}: {}", full_path, e);
                continue;
            }
        };
        if info.is_file() {
            filenames.push(full_path);
        }
    }

    debug!("Listed {} file(s) in {}", filenames.len(), path);
    Ok(filenames)
}

/// List the regular files directly under `path`.
///
/// Returns `None` when the listing cannot be produced: `path` is empty,
/// missing, not a directory, or cannot be opened.
pub fn list_files_in_directory(path: &str) -> Option<Vec<String>> {
    try_list_files_in_directory(path).ok()
}

/// List the regular files under `path` whose extension matches
/// `extension`, compared ASCII case-insensitively and without the dot
pub fn list_files_in_directory_with_extension(
    path: &str,
    extension: &str,
) -> Option<Vec<String>> {
    let wanted = extension.to_ascii_lowercase();
    let files = try_list_files_in_directory(path).ok()?;
    Some(
        files
            .into_iter()
            .filter(|file| get_file_extension_in_lower_case(file) == wanted)
            .collect(),
    )
}

/// Join the directory path and an entry name, inserting a `/` only when
/// the directory path does not already end in a separator
fn join_entry_path(directory: &str, name: &str) -> String {
    if directory.ends_with('/') || directory.ends_with('\\') {
        format!("{}{}", directory, name)
    } else {
        format!("{}/{}", directory, name)
    }
}
