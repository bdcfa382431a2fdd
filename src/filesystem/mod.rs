//! Filesystem utilities
//!
//! Thin synchronous wrappers over the OS metadata and directory
//! enumeration APIs. Boolean-returning functions collapse every failure
//! cause to a single false result; the `try_` variants surface the OS
//! failure cause as an [`FsError`](crate::error::FsError).

pub mod extension;
pub mod listing;
pub mod metadata;
pub mod operations;

// Re-export the public operations
pub use extension::get_file_extension_in_lower_case;
pub use listing::{
    list_files_in_directory, list_files_in_directory_with_extension,
    try_list_files_in_directory,
};
pub use metadata::{directory_exists, file_exists};
pub use operations::{delete_directory, make_directory, try_delete_directory, try_make_directory};
