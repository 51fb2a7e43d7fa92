//! Record file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Extension of catalog record documents.
pub const RECORD_EXTENSION: &str = "json";

/// Lists all record documents (`*.json`) in a directory.
///
/// Subdirectories are skipped. Returns files sorted by filename.
pub fn list_record_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if is_record_file(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Whether the path carries the record extension (case-insensitive).
pub fn is_record_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(RECORD_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &["b_item.json", "a_item.JSON", "notes.txt", "c_item.json.bak"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        dir
    }

    #[test]
    fn test_list_record_files() {
        let dir = create_test_dir();
        let files = list_record_files(dir.path()).unwrap();

        let names: Vec<&str> = files
            .iter()
            .filter_map(|path| path.file_name()?.to_str())
            .collect();
        assert_eq!(names, ["a_item.JSON", "b_item.json"]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("item-metadata");
        let error = list_record_files(&missing).unwrap_err();
        assert!(matches!(error, IngestError::DirectoryNotFound { .. }));
    }
}
