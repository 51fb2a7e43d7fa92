//! Loosely-typed source records.
//!
//! Catalog exports carry no schema: keys go missing, values turn up as `null`,
//! and a field that is usually a list sometimes arrives as a bare string. All
//! reads go through [`RecordView`], which folds every one of those cases into
//! `None` so callers only deal with "present" or "use the default".

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One unvalidated metadata record, as loaded from a catalog document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps a JSON value when it is an object. Anything else is not a record.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Borrowed accessor view over the record's top-level fields.
    pub fn view(&self) -> RecordView<'_> {
        RecordView {
            fields: Some(&self.0),
        }
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Read-only accessors over a (possibly absent) JSON object.
///
/// A view over a missing object behaves like an empty one, so chained lookups
/// such as `view.nested("item").list("notes")` never need intermediate checks.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> RecordView<'a> {
    /// A view with no fields.
    pub const fn empty() -> Self {
        Self { fields: None }
    }

    /// Raw value for `key`; `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields?.get(key).filter(|value| !value.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Nested object under `key`. Returns an empty view when the key is
    /// missing or not an object.
    pub fn nested(&self, key: &str) -> RecordView<'a> {
        RecordView {
            fields: self.get(key).and_then(Value::as_object),
        }
    }

    /// Scalar text for `key`.
    ///
    /// Strings are returned as-is and numbers or booleans are rendered. A list
    /// of scalars is joined with single spaces. Objects are unexpected and
    /// read as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
                Some(parts.join(" "))
            }
            other => scalar_text(other),
        }
    }

    /// Like [`RecordView::text`], falling back to `default`.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    /// List of strings for `key`.
    ///
    /// A bare scalar is promoted to a one-element list. Nested values and
    /// `null` elements inside a list are skipped.
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            Value::Array(items) => Some(items.iter().filter_map(scalar_text).collect()),
            Value::Object(_) => None,
            other => scalar_text(other).map(|value| vec![value]),
        }
    }

    /// Like [`RecordView::list`], falling back to `default`.
    pub fn list_or(&self, key: &str, default: &[&str]) -> Vec<String> {
        self.list(key)
            .unwrap_or_else(|| default.iter().map(|value| (*value).to_string()).collect())
    }

    /// Whether `key` holds a non-empty, non-false, non-zero value.
    pub fn is_truthy(&self, key: &str) -> bool {
        match self.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(text)) => !text.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(fields)) => !fields.is_empty(),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
