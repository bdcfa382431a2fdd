//! File extension queries
//!
//! Pure string inspection; no filesystem access.

/// Returns the extension of `path` in ASCII lowercase, without the dot.
///
/// Returns an empty string when the path contains no `.`, the `.` is the
/// final character, or a path separator follows the final `.` (so a
/// dotted directory component is never mistaken for an extension).
pub fn get_file_extension_in_lower_case(path: &str) -> String {
    let dot_pos = match path.rfind('.') {
        Some(pos) => pos,
        None => return String::new(),
    };
    if dot_pos == path.len() - 1 {
        return String::new();
    }
    let ext = &path[dot_pos + 1..];
    if ext.contains(['/', '\\']) {
        return String::new();
    }
    ext.to_ascii_lowercase()
}
