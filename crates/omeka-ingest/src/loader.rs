//! Record loading.
//!
//! A catalog document wraps the record in a top-level `item` object. Reading a
//! directory never stops at a bad file: unreadable documents are collected as
//! [`RecordFailure`]s and documents without an `item` are listed as empty, so
//! the caller can report both at the end of a batch.

use std::path::{Path, PathBuf};

use omeka_model::RawRecord;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::discovery::list_record_files;
use crate::error::{IngestError, Result};

/// Key of the record object inside a catalog document.
pub const ITEM_KEY: &str = "item";

/// Outcome of loading one document.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedRecord {
    /// The document carried a non-empty `item` object.
    Record(RawRecord),
    /// The document had no `item`, or an empty one.
    Empty,
}

/// A record together with the file it came from.
#[derive(Debug, Clone)]
pub struct SourcedRecord {
    pub path: PathBuf,
    pub record: RawRecord,
}

/// A document that could not be read.
#[derive(Debug)]
pub struct RecordFailure {
    pub path: PathBuf,
    pub error: IngestError,
}

/// Everything read from one metadata directory.
#[derive(Debug, Default)]
pub struct RecordBatch {
    /// Records in filename order.
    pub records: Vec<SourcedRecord>,
    pub failures: Vec<RecordFailure>,
    pub empty: Vec<PathBuf>,
}

impl RecordBatch {
    /// Number of documents seen, whatever their outcome.
    pub fn document_count(&self) -> usize {
        self.records.len() + self.failures.len() + self.empty.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Extract the record from a parsed catalog document.
///
/// Returns `None` when the document is not a JSON object.
pub fn record_from_document(document: Value) -> Option<LoadedRecord> {
    let Value::Object(mut fields) = document else {
        return None;
    };
    let loaded = match fields.remove(ITEM_KEY).and_then(RawRecord::from_value) {
        Some(record) if !record.is_empty() => LoadedRecord::Record(record),
        _ => LoadedRecord::Empty,
    };
    Some(loaded)
}

/// Read and parse one catalog document.
pub fn load_record(path: &Path) -> Result<LoadedRecord> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let document: Value = serde_json::from_str(&contents).map_err(|e| IngestError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    record_from_document(document).ok_or_else(|| IngestError::NotAnObject {
        path: path.to_path_buf(),
    })
}

/// Load every record document in `dir`.
///
/// # Errors
///
/// Fails only when the directory itself cannot be listed. Per-file problems
/// end up in [`RecordBatch::failures`].
pub fn read_records(dir: &Path) -> Result<RecordBatch> {
    let files = list_record_files(dir)?;
    let mut batch = RecordBatch::default();

    for path in files {
        match load_record(&path) {
            Ok(LoadedRecord::Record(record)) => {
                debug!(path = %path.display(), fields = record.len(), "loaded record");
                batch.records.push(SourcedRecord { path, record });
            }
            Ok(LoadedRecord::Empty) => {
                warn!(path = %path.display(), "document has no item data");
                batch.empty.push(path);
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to read record");
                batch.failures.push(RecordFailure { path, error });
            }
        }
    }

    info!(
        directory = %dir.display(),
        records = batch.records.len(),
        failed = batch.failures.len(),
        empty = batch.empty.len(),
        "record ingest complete"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_item_becomes_record() {
        let loaded = record_from_document(json!({ "item": { "title": "Harbor" } }));
        match loaded {
            Some(LoadedRecord::Record(record)) => assert_eq!(record.len(), 1),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn missing_or_empty_item_is_empty() {
        assert_eq!(
            record_from_document(json!({ "results": [] })),
            Some(LoadedRecord::Empty)
        );
        assert_eq!(
            record_from_document(json!({ "item": {} })),
            Some(LoadedRecord::Empty)
        );
        assert_eq!(
            record_from_document(json!({ "item": "text" })),
            Some(LoadedRecord::Empty)
        );
    }

    #[test]
    fn non_object_document_is_rejected() {
        assert_eq!(record_from_document(json!([1, 2, 3])), None);
    }
}
