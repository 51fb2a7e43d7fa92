//! Normalization engine for archival metadata.
//!
//! Pure text-to-value transforms applied by the record mapper:
//!
//! - **text**: markup and entity cleanup for free-text fields
//! - **dates**: ordered pattern rules producing canonical date tokens
//! - **extent**: physical description split into extent and form

pub mod dates;
pub mod error;
pub mod extent;
pub mod text;

pub use dates::{DATE_RULES, DateRule, extract_dates, resolve_month};
pub use error::{NormalizeError, Result};
pub use extent::split_extent_form;
pub use text::clean;
