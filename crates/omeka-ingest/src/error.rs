//! Error types for record ingestion.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while discovering or reading records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a record file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Document Errors ===
    /// The file is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed, but its top level is not a JSON object.
    #[error("expected a JSON object at the top level of {path}")]
    NotAnObject { path: PathBuf },
}

impl IngestError {
    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryNotFound { path }
            | Self::DirectoryRead { path, .. }
            | Self::FileRead { path, .. }
            | Self::Json { path, .. }
            | Self::NotAnObject { path } => path,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DirectoryNotFound {
            path: PathBuf::from("/path/to/item-metadata"),
        };
        assert_eq!(err.to_string(), "directory not found: /path/to/item-metadata");
        assert_eq!(err.path(), Path::new("/path/to/item-metadata"));
    }
}
