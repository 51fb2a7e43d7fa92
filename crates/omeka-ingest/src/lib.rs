//! Catalog record ingestion.
//!
//! Discovers `*.json` record documents in a metadata directory and loads each
//! one into a [`omeka_model::RawRecord`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use omeka_ingest::read_records;
//!
//! let batch = read_records(Path::new("collection-data/item-metadata"))?;
//! println!("{} records, {} unreadable", batch.records.len(), batch.failure_count());
//! ```

mod discovery;
mod error;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{RECORD_EXTENSION, is_record_file, list_record_files};

// === Loading ===
pub use loader::{
    ITEM_KEY, LoadedRecord, RecordBatch, RecordFailure, SourcedRecord, load_record, read_records,
    record_from_document,
};
