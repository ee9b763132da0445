//! Error handling for `epi-stats`.
//!
//! Only the input layer and argument parsing can fail. Problems with individual
//! records are reported as [`crate::schema::Validation`] values, never as errors.

pub mod util;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Specialized error type for `epi-stats`
#[derive(Debug, Error)]
pub enum Error {
    /// Error opening or reading an input source
    #[error("IO error for {}: {source}", .path.display())]
    IoError {
        /// The file being read, or `-` for stdin
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A date argument that is not a real `YYYY-MM-DD` date
    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A gender argument other than `M` or `Z`
    #[error("Invalid gender: '{0}' (expected M or Z)")]
    InvalidGender(String),

    /// A report command outside the closed set of reports
    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    /// A histogram width that is not a positive integer
    #[error("Invalid histogram width: '{0}' (expected a positive integer)")]
    InvalidHistogramWidth(String),
}

impl Error {
    /// Create an I/O error attached to a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Result type for `epi-stats` operations
pub type Result<T> = std::result::Result<T, Error>;
