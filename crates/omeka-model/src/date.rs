//! Normalized date tokens.

use std::fmt;

use serde::{Serialize, Serializer};

/// The four canonical date shapes an extracted token may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateShape {
    /// `YYYY`
    Year,
    /// `YYYY/YYYY`
    YearRange,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY-MM-DD`
    FullDate,
}

/// A date string in one of the [`DateShape`] forms.
///
/// Tokens are built only through the shape constructors below, which is what
/// keeps the string in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateToken {
    shape: DateShape,
    value: String,
}

impl DateToken {
    pub fn year(year: &str) -> Self {
        Self {
            shape: DateShape::Year,
            value: year.to_string(),
        }
    }

    /// A range in scan order; the years are not reordered by magnitude.
    pub fn range(start: &str, end: &str) -> Self {
        Self {
            shape: DateShape::YearRange,
            value: format!("{start}/{end}"),
        }
    }

    pub fn year_month(year: &str, month: u32) -> Self {
        Self {
            shape: DateShape::YearMonth,
            value: format!("{year}-{month:02}"),
        }
    }

    pub fn full_date(year: &str, month: &str, day: &str) -> Self {
        Self {
            shape: DateShape::FullDate,
            value: format!("{year}-{month}-{day}"),
        }
    }

    pub fn shape(&self) -> DateShape {
        self.shape
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for DateToken {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for DateToken {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for DateToken {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl Serialize for DateToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

/// Joins tokens into a single cell value.
pub fn join_tokens(tokens: &[DateToken], separator: &str) -> String {
    tokens
        .iter()
        .map(DateToken::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}
