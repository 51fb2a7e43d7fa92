//! CSV Import output.
//!
//! Lays canonical records out as rows for a collections-management CSV
//! importer and writes them with the `csv` crate:
//!
//! - **row**: column naming, vocabulary prefixes, per-record rows
//! - **writer**: header-from-first-row CSV serialization

mod error;
pub mod row;
pub mod writer;

pub use error::{OutputError, Result};
pub use row::{
    DATE_UPLOADED_COLUMN, ITEM_TYPE_COLUMN, ImportRow, RowOptions, SOURCE_FILE_COLUMN, today,
};
pub use writer::{write_csv, write_rows};
