use std::path::PathBuf;

use chromprep_core::ChromPrepError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessingError {
    #[error("Family root directory not found: {0:?}")]
    MissingRootDirectory(PathBuf),

    #[error("Ploidy reference table not found: {0:?}")]
    MissingReferenceTable(PathBuf),

    #[error("Input table not found: {0:?}. Run the previous step first")]
    MissingInput(PathBuf),

    #[error("No valid values in column {0} to take an extreme over")]
    NoValidValues(String),

    #[error(transparent)]
    Core(#[from] ChromPrepError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PreprocessingError>;
