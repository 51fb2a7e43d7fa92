use std::path::PathBuf;

use omeka_model::FieldIssue;

/// A mapped record whose fields needed defaults.
#[derive(Debug, Clone)]
pub struct RecordIssues {
    pub path: PathBuf,
    pub issues: Vec<FieldIssue>,
}

/// A document that could not be read.
#[derive(Debug, Clone)]
pub struct DocumentError {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug)]
pub struct BuildResult {
    pub metadata_dir: PathBuf,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
    pub documents: usize,
    pub rows: usize,
    pub empty: Vec<PathBuf>,
    pub failures: Vec<DocumentError>,
    pub issues: Vec<RecordIssues>,
}

impl BuildResult {
    /// True when any document could not be read.
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.iter().map(|record| record.issues.len()).sum()
    }
}
