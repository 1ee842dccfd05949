use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("file '{}' contains no data rows", .path.display())]
    EmptyFile { path: PathBuf },
    #[error("failed to parse {} data from '{}': {}", .format, .path.display(), .source)]
    Parse {
        format: String,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("invalid cleaning method: '{0}'")]
    InvalidCleaningMethod(String),
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate column name: '{0}'")]
    DuplicateColumn(String),
}

pub type Result<T> = std::result::Result<T, EdaError>;
