//! Date extraction from free-text "created/published" statements.
//!
//! Catalog dates are written by hand: `c. 1941 Sept.`, `[between 1900 and
//! 1905]`, `September 2012`. Rather than parsing a grammar, extraction runs
//! an ordered list of independent [`DateRule`]s over the whole text and
//! concatenates what each one finds. Rules overlap on purpose, so one input
//! may yield several tokens (`1941 Sept.` gives both `1941` and `1941-09`).
//!
//! Output order is rule order first, then left-to-right within a rule.
//! Tokens are never deduplicated.

use std::sync::LazyLock;

use omeka_model::DateToken;
use regex::{Captures, Regex};
use tracing::trace;

/// Optional leading qualifier shared by the year and range rules.
const QUALIFIER: &str = r"(?:c|ca\.?|between|after|before|in|on|around|circa)?";

/// Month abbreviations, indexed by month number minus one.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

static SINGLE_YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{QUALIFIER}\s*\[?\s*(\d{{4}})\s*\]?\b"))
        .expect("Invalid single year regex")
});

static YEAR_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b{QUALIFIER}\s*\[?\s*(\d{{4}})\s*(and|-|to|/|or)\s*(\d{{4}})\s*\]?\b"
    ))
    .expect("Invalid year range regex")
});

static YEAR_MONTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4})\s*([A-Za-z]+)\b").expect("Invalid year-month regex")
});

static MONTH_YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z]+)\s+(\d{4})\b").expect("Invalid month-year regex")
});

static ISO_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").expect("Invalid ISO date regex")
});

/// One pattern rule: a regex plus the function that turns a match into a
/// token. Emitters return `None` to drop a match silently.
pub struct DateRule {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    emit: fn(&Captures<'_>) -> Option<DateToken>,
}

impl DateRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All tokens this rule emits for `text`, in scan order.
    pub fn apply(&self, text: &str) -> Vec<DateToken> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| (self.emit)(&caps))
            .collect()
    }
}

impl std::fmt::Debug for DateRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// `c. 1999`, `[1999]`, `circa 1999` → `1999`.
pub static SINGLE_YEAR: DateRule = DateRule {
    name: "single_year",
    pattern: &SINGLE_YEAR_PATTERN,
    emit: emit_single_year,
};

/// `between 1900 and 1905`, `1999-2001` → `1900/1905`.
pub static YEAR_RANGE: DateRule = DateRule {
    name: "year_range",
    pattern: &YEAR_RANGE_PATTERN,
    emit: emit_three_part,
};

/// `1941 Sept.` → `1941-09`.
pub static YEAR_MONTH: DateRule = DateRule {
    name: "year_month",
    pattern: &YEAR_MONTH_PATTERN,
    emit: emit_year_month,
};

/// `September 2012` → `2012-09`.
pub static MONTH_YEAR: DateRule = DateRule {
    name: "month_year",
    pattern: &MONTH_YEAR_PATTERN,
    emit: emit_month_year,
};

/// `2015-09-30` → `2015-09-30`.
pub static ISO_DATE: DateRule = DateRule {
    name: "iso_date",
    pattern: &ISO_DATE_PATTERN,
    emit: emit_three_part,
};

/// Rules in precedence order.
pub static DATE_RULES: [&DateRule; 5] = [
    &SINGLE_YEAR,
    &YEAR_RANGE,
    &YEAR_MONTH,
    &MONTH_YEAR,
    &ISO_DATE,
];

/// Extract every date token from `text`.
///
/// # Example
/// ```
/// use omeka_normalize::dates::extract_dates;
///
/// let tokens = extract_dates("between 1900 and 1905");
/// assert!(tokens.iter().any(|token| token == "1900/1905"));
/// ```
pub fn extract_dates(text: &str) -> Vec<DateToken> {
    DATE_RULES
        .iter()
        .flat_map(|rule| rule.apply(text))
        .collect()
}

/// Month number for a month word, matched on its first three letters.
///
/// `Sept.`, `september` and `SEP` all resolve to 9. Words shorter than three
/// letters never resolve.
pub fn resolve_month(word: &str) -> Option<u32> {
    let prefix = word.get(..3)?;
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbreviation| abbreviation.eq_ignore_ascii_case(prefix))
        .and_then(|index| u32::try_from(index + 1).ok())
}

fn emit_single_year(caps: &Captures<'_>) -> Option<DateToken> {
    Some(DateToken::year(&caps[1]))
}

// Ranges and ISO dates both capture three groups. An all-numeric match is a
// full date; otherwise the middle group is the range connector.
fn emit_three_part(caps: &Captures<'_>) -> Option<DateToken> {
    let first = caps.get(1)?.as_str();
    let middle = caps.get(2)?.as_str();
    let last = caps.get(3)?.as_str();
    if [first, middle, last].into_iter().all(is_numeric) {
        Some(DateToken::full_date(first, middle, last))
    } else {
        Some(DateToken::range(first, last))
    }
}

fn emit_year_month(caps: &Captures<'_>) -> Option<DateToken> {
    year_with_month(&caps[1], &caps[2])
}

fn emit_month_year(caps: &Captures<'_>) -> Option<DateToken> {
    year_with_month(&caps[2], &caps[1])
}

fn year_with_month(year: &str, word: &str) -> Option<DateToken> {
    match resolve_month(word) {
        Some(month) => Some(DateToken::year_month(year, month)),
        None => {
            trace!(year, word, "month word did not resolve");
            None
        }
    }
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.chars().all(char::is_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_words_resolve_on_prefix() {
        assert_eq!(resolve_month("Sept"), Some(9));
        assert_eq!(resolve_month("september"), Some(9));
        assert_eq!(resolve_month("DEC"), Some(12));
        assert_eq!(resolve_month("Foo"), None);
        assert_eq!(resolve_month("ma"), None);
    }

    #[test]
    fn rules_are_in_precedence_order() {
        let names: Vec<&str> = DATE_RULES.iter().map(|rule| rule.name()).collect();
        assert_eq!(
            names,
            ["single_year", "year_range", "year_month", "month_year", "iso_date"]
        );
    }

    #[test]
    fn three_part_emitter_distinguishes_connector() {
        let range = YEAR_RANGE.apply("1999 to 2001");
        assert_eq!(range, vec![DateToken::range("1999", "2001")]);
        let iso = ISO_DATE.apply("2015-09-30");
        assert_eq!(iso, vec![DateToken::full_date("2015", "09", "30")]);
    }
}
