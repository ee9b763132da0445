//! Logging utilities
//!
//! Consistent log messages for input handling and record loading.

pub mod log;

pub use self::log::{log_load_summary, log_source_read, log_source_start};
