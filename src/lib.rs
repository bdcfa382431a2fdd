pub mod error;
pub mod filesystem;

pub use error::FsError;
pub use filesystem::{
    delete_directory, directory_exists, file_exists, get_file_extension_in_lower_case,
    list_files_in_directory, list_files_in_directory_with_extension, make_directory,
    try_delete_directory, try_list_files_in_directory, try_make_directory,
};
