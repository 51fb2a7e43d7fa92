//! Canonical record → import row.

use std::path::Path;

use chrono::Local;
use omeka_model::{CanonicalField, CanonicalRecord, FieldValue, Vocabulary, join_tokens};

/// Leading columns that describe the import rather than the item.
pub const ITEM_TYPE_COLUMN: &str = "item_type";
pub const DATE_UPLOADED_COLUMN: &str = "date_uploaded";
pub const SOURCE_FILE_COLUMN: &str = "source_file";

/// How records are laid out as import rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOptions {
    /// Resource class written to `item_type`.
    pub item_type: String,
    /// `YYYY-MM-DD` stamp written to `date_uploaded`.
    pub date_uploaded: String,
    /// Prefix for Dublin Core columns, e.g. `dcterms:`.
    pub dcterms_prefix: String,
    /// Prefix for MODS columns, e.g. `mods:`.
    pub mods_prefix: String,
    /// Separator between date tokens in the `created` column.
    pub list_separator: String,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            item_type: "Item".to_string(),
            date_uploaded: today(),
            dcterms_prefix: "dcterms:".to_string(),
            mods_prefix: "mods:".to_string(),
            list_separator: ";".to_string(),
        }
    }
}

impl RowOptions {
    /// Column header for a canonical field.
    pub fn column_name(&self, field: CanonicalField) -> String {
        let prefix = match field.vocabulary() {
            Vocabulary::Dcterms => &self.dcterms_prefix,
            Vocabulary::Mods => &self.mods_prefix,
        };
        format!("{prefix}{}", field.term())
    }

    /// All column headers, in row order.
    pub fn header(&self) -> Vec<String> {
        let mut header = vec![
            ITEM_TYPE_COLUMN.to_string(),
            DATE_UPLOADED_COLUMN.to_string(),
            SOURCE_FILE_COLUMN.to_string(),
        ];
        header.extend(CanonicalField::ALL.iter().map(|field| self.column_name(*field)));
        header
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// One output row as ordered (column, value) cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    cells: Vec<(String, String)>,
}

impl ImportRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    /// Build the row for `record`, loaded from `source`.
    pub fn from_record(record: &CanonicalRecord, source: &Path, options: &RowOptions) -> Self {
        let mut cells = vec![
            (ITEM_TYPE_COLUMN.to_string(), options.item_type.clone()),
            (
                DATE_UPLOADED_COLUMN.to_string(),
                options.date_uploaded.clone(),
            ),
            (
                SOURCE_FILE_COLUMN.to_string(),
                source.display().to_string(),
            ),
        ];
        for field in CanonicalField::ALL {
            let value = match record.value(field) {
                FieldValue::Text(text) => text.to_string(),
                FieldValue::Dates(tokens) => join_tokens(tokens, &options.list_separator),
                FieldValue::Missing => String::new(),
            };
            cells.push((options.column_name(field), value));
        }
        Self { cells }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(column, _)| column.as_str())
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_use_vocabulary_prefix() {
        let options = RowOptions::default();
        assert_eq!(options.column_name(CanonicalField::Title), "dcterms:title");
        assert_eq!(
            options.column_name(CanonicalField::PhysicalExtent),
            "mods:physicalExtent"
        );
        assert_eq!(options.header().len(), 16);
    }

    #[test]
    fn today_is_iso_date() {
        let stamp = today();
        assert_eq!(stamp.len(), 10);
        assert_eq!(stamp.as_bytes()[4], b'-');
    }
}
