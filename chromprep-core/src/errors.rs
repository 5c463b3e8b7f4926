use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChromPrepError {
    #[error("File not found: {0:?}")]
    MissingFile(PathBuf),

    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Invalid chromosome count in {path:?} at line {line}: {value:?}")]
    InvalidChromCount {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("Column {column:?} not found in {path:?}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid extreme type: {0} (expected `min` or `max`)")]
    InvalidExtremeType(String),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChromPrepError>;
