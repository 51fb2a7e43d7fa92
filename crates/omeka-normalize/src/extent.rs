//! Physical description splitting.
//!
//! Catalog `medium` values follow the AACR2 punctuation habit
//! `extent : other details ; dimensions`, e.g. `12 p. : ill. ; 30 cm`. The
//! text between the colon and the semicolon is the physical form; the rest
//! is extent. Descriptions where the form is fused into the extent with no
//! delimiter are left whole.

use std::sync::LazyLock;

use omeka_model::ExtentForm;
use regex::Regex;

use crate::error::{NormalizeError, Result};

const FIELD: &str = "physical description";

static EXTENT_FORM_EXTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*:\s*(.*?)\s*;\s*(.*)$").expect("Invalid extent/form regex")
});

/// Split physical description values into extent and form.
///
/// - several values: joined with `;` as extent, no form
/// - one value with `:` and `;`: `before : form ; after` → (`before;after`, `form`)
/// - one value with `:` only: split on `" : "` into exactly (extent, form)
/// - anything else: the value as extent, no form
///
/// # Errors
///
/// Returns [`NormalizeError::MalformedInput`] for an empty slice, when the
/// colon/semicolon layout does not read as `extent : form ; extent`, or
/// when a colon-only value lacks exactly one `" : "` delimiter.
///
/// # Example
/// ```
/// use omeka_normalize::extent::split_extent_form;
///
/// let pair = split_extent_form(&["12 p. : ill. ; 30 cm"]).unwrap();
/// assert_eq!(pair.extent, "12 p.;30 cm");
/// assert_eq!(pair.form, "ill.");
/// ```
pub fn split_extent_form<S: AsRef<str>>(values: &[S]) -> Result<ExtentForm> {
    let value = match values {
        [] => return Err(NormalizeError::malformed(FIELD, "no values supplied")),
        [single] => single.as_ref(),
        many => {
            let joined: Vec<&str> = many.iter().map(AsRef::as_ref).collect();
            return Ok(ExtentForm::extent_only(joined.join(";")));
        }
    };

    match (value.contains(':'), value.contains(';')) {
        (true, true) => split_form_between(value),
        (true, false) => split_on_colon(value),
        _ => Ok(ExtentForm::extent_only(value)),
    }
}

fn split_form_between(value: &str) -> Result<ExtentForm> {
    let caps = EXTENT_FORM_EXTENT.captures(value).ok_or_else(|| {
        NormalizeError::malformed(FIELD, format!("no ';' follows the ':' in {value:?}"))
    })?;
    let extent = format!("{};{}", &caps[1], &caps[3]);
    Ok(ExtentForm::new(extent, &caps[2]))
}

fn split_on_colon(value: &str) -> Result<ExtentForm> {
    let parts: Vec<&str> = value.split(" : ").collect();
    match parts.as_slice() {
        [extent, form] => Ok(ExtentForm::new(*extent, *form)),
        _ => Err(NormalizeError::malformed(
            FIELD,
            format!("expected a single \" : \" delimiter in {value:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_only_requires_spaced_delimiter() {
        let pair = split_on_colon("1 photograph : gelatin silver").unwrap();
        assert_eq!(pair, ExtentForm::new("1 photograph", "gelatin silver"));
        assert!(split_on_colon("1 photograph:gelatin silver").is_err());
        assert!(split_on_colon("a : b : c").is_err());
    }

    #[test]
    fn semicolon_before_colon_is_malformed() {
        assert!(split_form_between("30 cm ; 12 p. : ill.").is_err());
    }
}
