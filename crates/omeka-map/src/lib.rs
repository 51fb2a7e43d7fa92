#![deny(unsafe_code)]

//! Record mapping for catalog item metadata.
//!
//! [`RecordMapper`] turns one [`omeka_model::RawRecord`] into one
//! [`omeka_model::CanonicalRecord`]. Derivations live in [`fields`], one
//! function per canonical field, and never abort the record: a failing
//! field is replaced by its default and reported as a
//! [`omeka_model::FieldIssue`].

pub mod fields;
pub mod mapper;

pub use fields::{DESCRIPTION_STRATEGIES, DescriptionStrategy, keys, resolve_description};
pub use mapper::{MappedRecord, RecordMapper, map_record};
