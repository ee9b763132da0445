//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Safely open an input file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path) -> Result<fs::File> {
    if path.is_dir() {
        return Err(Error::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path is a directory, not a file"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::PermissionDenied => "permission denied, check file permissions",
            io::ErrorKind::NotFound => "file not found",
            _ => "failed to open file",
        };
        Error::io(path, io::Error::new(e.kind(), format!("{message}: {e}")))
    })
}
