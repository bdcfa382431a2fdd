//! Error handling
//!
//! Defines error types for the filesystem utilities.

pub mod types;

pub use types::*;
