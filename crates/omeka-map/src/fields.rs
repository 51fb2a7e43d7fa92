//! Per-field derivations.
//!
//! Each function reads one canonical field out of a record view and applies
//! its documented default. None of them depend on each other.

use std::sync::LazyLock;

use omeka_model::{DateToken, ExtentForm, NOT_AVAILABLE, RecordView};
use omeka_normalize::{NormalizeError, clean, extract_dates, split_extent_form};
use regex::Regex;
use tracing::trace;

/// Source keys in catalog item records.
pub mod keys {
    pub const TITLE: &str = "title";
    pub const CREATED_PUBLISHED_DATE: &str = "created_published_date";
    pub const DESCRIPTION: &str = "description";
    pub const CONTRIBUTOR_NAMES: &str = "contributor_names";
    pub const LINK: &str = "link";
    pub const MIME_TYPE: &str = "mime_type";
    pub const MEDIUM: &str = "medium";
    pub const SUBJECT_HEADINGS: &str = "subject_headings";
    pub const LANGUAGE: &str = "language";
    pub const RIGHTS_ADVISORY: &str = "rights_advisory";
    pub const RIGHTS_INFORMATION: &str = "rights_information";
    pub const RIGHTS: &str = "rights";

    /// Nested object holding `notes` and `control_number`.
    pub const ITEM: &str = "item";
    pub const NOTES: &str = "notes";
    pub const CONTROL_NUMBER: &str = "control_number";
}

/// Marker after which an inline description carries the authoritative text.
static INLINE_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\. \| (.+)").expect("Invalid inline description regex"));

/// A way of finding the description; `None` defers to the next strategy.
pub type DescriptionStrategy = fn(RecordView<'_>) -> Option<String>;

/// Description sources, most authoritative first.
pub const DESCRIPTION_STRATEGIES: [(&str, DescriptionStrategy); 2] = [
    ("inline", inline_description),
    ("notes", joined_notes),
];

pub fn title(view: RecordView<'_>) -> String {
    view.text_or(keys::TITLE, NOT_AVAILABLE)
}

pub fn created(view: RecordView<'_>) -> Vec<DateToken> {
    extract_dates(&view.text_or(keys::CREATED_PUBLISHED_DATE, NOT_AVAILABLE))
}

/// First description strategy that yields a value.
pub fn description(view: RecordView<'_>) -> String {
    match resolve_description(view) {
        Some((source, text)) => {
            trace!(strategy = source, "description resolved");
            text
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// The description together with the name of the strategy that found it.
pub fn resolve_description(view: RecordView<'_>) -> Option<(&'static str, String)> {
    DESCRIPTION_STRATEGIES
        .iter()
        .find_map(|(name, strategy)| strategy(view).map(|text| (*name, text)))
}

/// Text after `". | "` in the first `description` entry.
pub fn inline_description(view: RecordView<'_>) -> Option<String> {
    let first = view.list(keys::DESCRIPTION)?.into_iter().next()?;
    INLINE_DESCRIPTION
        .captures(&first)
        .map(|caps| caps[1].to_string())
}

/// Nested `item.notes`, space-joined.
pub fn joined_notes(view: RecordView<'_>) -> Option<String> {
    let notes = view
        .nested(keys::ITEM)
        .list_or(keys::NOTES, &[NOT_AVAILABLE]);
    Some(notes.join(" "))
}

pub fn contributor(view: RecordView<'_>) -> String {
    view.list_or(keys::CONTRIBUTOR_NAMES, &[NOT_AVAILABLE])
        .join(";")
}

pub fn identifier(view: RecordView<'_>) -> Option<String> {
    view.nested(keys::ITEM).text(keys::CONTROL_NUMBER)
}

pub fn location_url(view: RecordView<'_>) -> String {
    view.text_or(keys::LINK, NOT_AVAILABLE)
}

pub fn media_type(view: RecordView<'_>) -> String {
    view.text_or(keys::MIME_TYPE, NOT_AVAILABLE)
}

/// Extent and form from `medium`.
///
/// # Errors
///
/// [`NormalizeError::MalformedInput`] when `medium` is absent, empty, or
/// laid out in a way the splitter rejects.
pub fn extent_form(view: RecordView<'_>) -> Result<ExtentForm, NormalizeError> {
    let medium = view.list(keys::MEDIUM).unwrap_or_default();
    split_extent_form(&medium)
}

pub fn subject(view: RecordView<'_>) -> String {
    view.list_or(keys::SUBJECT_HEADINGS, &[NOT_AVAILABLE])
        .join(";")
}

pub fn language(view: RecordView<'_>) -> String {
    view.list(keys::LANGUAGE)
        .and_then(|languages| languages.into_iter().next())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `rights_advisory` when it carries readable text, else `rights_information`.
pub fn access_condition(view: RecordView<'_>) -> Option<String> {
    view.is_truthy(keys::RIGHTS_ADVISORY)
        .then(|| view.text(keys::RIGHTS_ADVISORY))
        .flatten()
        .filter(|advisory| !advisory.is_empty())
        .or_else(|| view.text(keys::RIGHTS_INFORMATION))
}

pub fn rights(view: RecordView<'_>) -> String {
    clean(&view.text_or(keys::RIGHTS, NOT_AVAILABLE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use omeka_model::RawRecord;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawRecord {
        RawRecord::from_value(value).unwrap()
    }

    #[test]
    fn inline_description_takes_text_after_marker() {
        let record = raw(json!({
            "description": ["1 photograph. | Boats in the harbor at dusk."]
        }));
        assert_eq!(
            inline_description(record.view()).as_deref(),
            Some("Boats in the harbor at dusk.")
        );
    }

    #[test]
    fn inline_description_defers_without_marker() {
        let record = raw(json!({ "description": ["Boats in the harbor."] }));
        assert_eq!(inline_description(record.view()), None);
        assert_eq!(inline_description(raw(json!({})).view()), None);
    }

    #[test]
    fn notes_default_to_sentinel() {
        assert_eq!(joined_notes(raw(json!({})).view()).as_deref(), Some("N/A"));
    }

    #[test]
    fn advisory_wins_only_when_truthy() {
        let record = raw(json!({
            "rights_advisory": "",
            "rights_information": "No known restrictions."
        }));
        assert_eq!(
            access_condition(record.view()).as_deref(),
            Some("No known restrictions.")
        );
    }

    #[test]
    fn advisory_without_text_defers_to_rights_information() {
        let record = raw(json!({
            "rights_advisory": { "code": "restricted" },
            "rights_information": "No known restrictions."
        }));
        assert_eq!(
            access_condition(record.view()).as_deref(),
            Some("No known restrictions.")
        );

        let record = raw(json!({
            "rights_advisory": [{ "code": "restricted" }],
            "rights_information": "No known restrictions."
        }));
        assert_eq!(
            access_condition(record.view()).as_deref(),
            Some("No known restrictions.")
        );
    }

    #[test]
    fn description_reports_its_strategy() {
        let inline = raw(json!({ "description": ["1 print. | Harbor at dusk."] }));
        assert_eq!(
            resolve_description(inline.view()),
            Some(("inline", "Harbor at dusk.".to_string()))
        );

        let notes = raw(json!({ "item": { "notes": ["Gift."] } }));
        assert_eq!(
            resolve_description(notes.view()),
            Some(("notes", "Gift.".to_string()))
        );
    }

    #[test]
    fn missing_medium_is_malformed() {
        assert!(extent_form(raw(json!({})).view()).is_err());
    }
}
