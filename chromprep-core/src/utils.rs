use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use flate2::read::MultiGzDecoder;

use crate::errors::{ChromPrepError, Result};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)
        .map_err(|e| ChromPrepError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Hidden and system entries (`.ipynb_checkpoints`, `.DS_Store`, ...) start with a dot.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

///
/// Find the position of a named column in a csv header row.
///
/// # Arguments
///
/// - headers: the header record
/// - column: column name, matched exactly
/// - path: the file the header came from, for error reporting
///
pub fn column_index(headers: &StringRecord, column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ChromPrepError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}
