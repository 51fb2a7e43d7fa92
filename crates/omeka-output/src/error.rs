//! Error types for CSV output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv flush failed: {0}")]
    Flush(#[from] std::io::Error),

    /// Nothing to derive a header from.
    #[error("no rows to write")]
    NoRows,

    #[error("row {row} has column '{column}' missing from the header")]
    UnexpectedColumn { row: usize, column: String },
}

pub type Result<T> = std::result::Result<T, OutputError>;
