//! Log messages for reading sources and loading records

use std::path::Path;
use std::time::Duration;

use crate::reader::Compression;

/// Log that a source is about to be read
pub fn log_source_start(path: &Path) {
    log::info!(
        "Reading records from {} ({})",
        path.display(),
        compression_name(Compression::from_path(path))
    );
}

/// Log the number of lines read from a source; an empty source is a warning
pub fn log_source_read(path: &Path, lines: usize, elapsed: Duration) {
    if lines == 0 {
        log::warn!("Input source is empty: {}", path.display());
    } else {
        log::info!("Read {lines} lines from {} in {elapsed:?}", path.display());
    }
}

/// Log the outcome of parsing and validation
pub fn log_load_summary(records: usize, dropped: usize, skipped: usize) {
    log::debug!("{}", load_summary(records, dropped, skipped));
}

fn load_summary(records: usize, dropped: usize, skipped: usize) -> String {
    format!(
        "Loaded {records} records, dropped {dropped} invalid, skipped {skipped} header or blank lines"
    )
}

const fn compression_name(compression: Compression) -> &'static str {
    match compression {
        Compression::None => "plain text",
        Compression::Gzip => "gzip",
        Compression::Bzip2 => "bzip2",
    }
}
