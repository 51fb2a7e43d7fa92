//! The normalized output record and its column catalogue.

use serde::Serialize;

use crate::date::DateToken;

/// Sentinel written wherever a source value could not be determined.
pub const NOT_AVAILABLE: &str = "N/A";

/// Physical description split into its extent and form parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtentForm {
    pub extent: String,
    /// `"N/A"` when no form could be isolated.
    pub form: String,
}

impl ExtentForm {
    pub fn new(extent: impl Into<String>, form: impl Into<String>) -> Self {
        Self {
            extent: extent.into(),
            form: form.into(),
        }
    }

    /// Extent with no separable form.
    pub fn extent_only(extent: impl Into<String>) -> Self {
        Self::new(extent, NOT_AVAILABLE)
    }

    /// Both parts unknown.
    pub fn unavailable() -> Self {
        Self::new(NOT_AVAILABLE, NOT_AVAILABLE)
    }
}

/// Normalized record ready for tabular export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalRecord {
    pub title: String,
    pub created: Vec<DateToken>,
    pub description: String,
    pub contributor: String,
    pub identifier: Option<String>,
    pub location_url: String,
    pub media_type: String,
    pub physical_extent: String,
    pub physical_form: String,
    pub subject: String,
    pub language: String,
    pub access_condition: Option<String>,
    pub rights: String,
}

impl CanonicalRecord {
    /// Value of a single field, in column order terms.
    pub fn value(&self, field: CanonicalField) -> FieldValue<'_> {
        match field {
            CanonicalField::Title => FieldValue::Text(&self.title),
            CanonicalField::Created => FieldValue::Dates(&self.created),
            CanonicalField::Description => FieldValue::Text(&self.description),
            CanonicalField::Contributor => FieldValue::Text(&self.contributor),
            CanonicalField::Identifier => self
                .identifier
                .as_deref()
                .map_or(FieldValue::Missing, FieldValue::Text),
            CanonicalField::LocationUrl => FieldValue::Text(&self.location_url),
            CanonicalField::MediaType => FieldValue::Text(&self.media_type),
            CanonicalField::PhysicalExtent => FieldValue::Text(&self.physical_extent),
            CanonicalField::PhysicalForm => FieldValue::Text(&self.physical_form),
            CanonicalField::Subject => FieldValue::Text(&self.subject),
            CanonicalField::Language => FieldValue::Text(&self.language),
            CanonicalField::AccessCondition => self
                .access_condition
                .as_deref()
                .map_or(FieldValue::Missing, FieldValue::Text),
            CanonicalField::Rights => FieldValue::Text(&self.rights),
        }
    }
}

/// Borrowed value of one canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Dates(&'a [DateToken]),
    Missing,
}

/// Metadata vocabulary a canonical field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// Dublin Core terms.
    Dcterms,
    /// Metadata Object Description Schema.
    Mods,
}

/// Canonical output fields, in export column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Title,
    Created,
    Description,
    Contributor,
    Identifier,
    LocationUrl,
    MediaType,
    PhysicalExtent,
    PhysicalForm,
    Subject,
    Language,
    AccessCondition,
    Rights,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 13] = [
        CanonicalField::Title,
        CanonicalField::Created,
        CanonicalField::Description,
        CanonicalField::Contributor,
        CanonicalField::Identifier,
        CanonicalField::LocationUrl,
        CanonicalField::MediaType,
        CanonicalField::PhysicalExtent,
        CanonicalField::PhysicalForm,
        CanonicalField::Subject,
        CanonicalField::Language,
        CanonicalField::AccessCondition,
        CanonicalField::Rights,
    ];

    pub fn vocabulary(self) -> Vocabulary {
        match self {
            CanonicalField::LocationUrl
            | CanonicalField::MediaType
            | CanonicalField::PhysicalExtent
            | CanonicalField::PhysicalForm
            | CanonicalField::AccessCondition => Vocabulary::Mods,
            _ => Vocabulary::Dcterms,
        }
    }

    /// Property term within the vocabulary.
    pub fn term(self) -> &'static str {
        match self {
            CanonicalField::Title => "title",
            CanonicalField::Created => "created",
            CanonicalField::Description => "description",
            CanonicalField::Contributor => "contributor",
            CanonicalField::Identifier => "identifier:controlNumber",
            CanonicalField::LocationUrl => "locationUrl",
            CanonicalField::MediaType => "mediaType",
            CanonicalField::PhysicalExtent => "physicalExtent",
            CanonicalField::PhysicalForm => "physicalForm",
            CanonicalField::Subject => "subject",
            CanonicalField::Language => "language",
            CanonicalField::AccessCondition => "accessCondition",
            CanonicalField::Rights => "rights",
        }
    }
}

/// A field whose derivation failed and was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
