//! Module for reading raw record lines from files or stdin.
//!
//! Files ending in `.gz` or `.bz2` are decompressed on the fly. Everything
//! else is read as plain text.

use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;

use crate::error::util::safe_open_file;
use crate::error::{Error, Result};
use crate::utils::logging::{log_source_read, log_source_start};

/// Path shown for standard input in logs and errors
pub const STDIN_NAME: &str = "-";

/// Compression of an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
}

impl Compression {
    /// Detect compression from the file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("gz") => Self::Gzip,
            Some("bz2") => Self::Bzip2,
            _ => Self::None,
        }
    }
}

/// Open a file as a buffered reader, decompressing by extension
pub fn open_source(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = safe_open_file(path)?;
    let reader: Box<dyn Read> = match Compression::from_path(path) {
        Compression::None => Box::new(file),
        Compression::Gzip => Box::new(MultiGzDecoder::new(file)),
        Compression::Bzip2 => Box::new(MultiBzDecoder::new(file)),
    };
    Ok(Box::new(BufReader::new(reader)))
}

/// Read all lines from a reader
///
/// Line endings are removed and invalid UTF-8 is replaced rather than
/// rejected, so one corrupt byte cannot abort a run.
pub fn read_lines<R: BufRead>(mut reader: R, path: &Path) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|e| Error::io(path, e))?;
        if read == 0 {
            break;
        }
        while matches!(buffer.last(), Some(b'\n' | b'\r')) {
            buffer.pop();
        }
        lines.push(String::from_utf8_lossy(&buffer).into_owned());
    }
    Ok(lines)
}

/// Read every line of every source, in order; stdin when no path is given
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<String>> {
    if paths.is_empty() {
        let stdin_path = Path::new(STDIN_NAME);
        log_source_start(stdin_path);
        let start = Instant::now();
        let lines = read_lines(io::stdin().lock(), stdin_path)?;
        log_source_read(stdin_path, lines.len(), start.elapsed());
        return Ok(lines);
    }

    let mut all_lines = Vec::new();
    for path in paths {
        log_source_start(path);
        let start = Instant::now();
        let lines = read_lines(open_source(path)?, path)?;
        log_source_read(path, lines.len(), start.elapsed());
        all_lines.extend(lines);
    }
    Ok(all_lines)
}
