//! Raw record → canonical record.

use omeka_model::{CanonicalField, CanonicalRecord, ExtentForm, FieldIssue, RawRecord};
use tracing::{debug, warn};

use crate::fields;

/// Canonical record plus the fields that fell back to defaults on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRecord {
    pub record: CanonicalRecord,
    pub issues: Vec<FieldIssue>,
}

impl MappedRecord {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Stateless mapper from catalog item records to canonical records.
///
/// Holds no per-record state, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct RecordMapper;

impl RecordMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map one record, collecting per-field issues instead of failing.
    pub fn map(&self, raw: &RawRecord) -> MappedRecord {
        let view = raw.view();
        let mut issues = Vec::new();

        let extent_form = match fields::extent_form(view) {
            Ok(pair) => pair,
            Err(error) => {
                debug!(%error, "physical description left unsplit");
                for field in [CanonicalField::PhysicalExtent, CanonicalField::PhysicalForm] {
                    issues.push(FieldIssue::new(field.term(), error.to_string()));
                }
                ExtentForm::unavailable()
            }
        };

        let record = CanonicalRecord {
            title: fields::title(view),
            created: fields::created(view),
            description: fields::description(view),
            contributor: fields::contributor(view),
            identifier: fields::identifier(view),
            location_url: fields::location_url(view),
            media_type: fields::media_type(view),
            physical_extent: extent_form.extent,
            physical_form: extent_form.form,
            subject: fields::subject(view),
            language: fields::language(view),
            access_condition: fields::access_condition(view),
            rights: fields::rights(view),
        };

        MappedRecord { record, issues }
    }
}

impl Default for RecordMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Map one record. Field issues are logged and replaced by defaults.
pub fn map_record(raw: &RawRecord) -> CanonicalRecord {
    let mapped = RecordMapper::new().map(raw);
    for issue in &mapped.issues {
        warn!(field = issue.field, message = %issue.message, "field replaced by default");
    }
    mapped.record
}
