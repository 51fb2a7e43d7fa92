//! Data model for archival metadata normalization.
//!
//! - **raw**: loosely-typed source records and defaulting accessors
//! - **date**: canonical date tokens
//! - **record**: the normalized output record and its field catalogue

pub mod date;
pub mod raw;
pub mod record;

pub use date::{DateShape, DateToken, join_tokens};
pub use raw::{RawRecord, RecordView};
pub use record::{
    CanonicalField, CanonicalRecord, ExtentForm, FieldIssue, FieldValue, NOT_AVAILABLE,
    Vocabulary,
};
