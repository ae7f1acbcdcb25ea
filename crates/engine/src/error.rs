use std::path::PathBuf;
use thiserror::Error;

/// Configuration rejected before any input is read.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("app ID is missing")]
    MissingAppId,

    #[error("CSV File is missing")]
    MissingCsvFile,

    #[error("file should have .csv extension")]
    NotCsv,

    #[error("file does not exists")]
    FileNotFound,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode CSV '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
