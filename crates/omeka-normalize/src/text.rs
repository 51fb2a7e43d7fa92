//! Free-text cleanup for catalog fields that carry markup.
//!
//! Rights statements and notes are exported with inline HTML and entity
//! escapes. [`clean`] reduces them to a single line of plain text.

use std::borrow::Cow;
use std::sync::LazyLock;

use quick_xml::escape::resolve_html5_entity;
use regex::{Captures, Regex};

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Decimal (`&#169;`), hex (`&#xA9;`) and named (`&nbsp;`) references. The
/// trailing `;` is optional, as HTML allows for legacy references.
static CHARACTER_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+;?|#[xX][0-9a-fA-F]+;?|[^\t\n\f <&#;]{1,32};?)")
        .expect("Invalid character reference regex")
});

/// Named references that HTML still resolves without a trailing `;`.
const LEGACY_ENTITIES: [&str; 106] = [
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig",
    "agrave", "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy",
    "curren", "deg", "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14",
    "frac34", "gt", "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt",
    "macr", "micro", "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf",
    "ordm", "oslash", "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg",
    "sect", "shy", "sup1", "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc",
    "ugrave", "uml", "uuml", "yacute", "yen", "yuml",
];

/// Numeric references `&#x80;` to `&#x9F;` read as Windows-1252.
const WINDOWS_1252_C1: [char; 32] = [
    '\u{20AC}', '\u{81}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{8D}', '\u{017D}', '\u{8F}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{9D}', '\u{017E}', '\u{0178}',
];

/// Clean markup out of a free-text value.
///
/// 1. Every `<...>` tag becomes a single space.
/// 2. HTML character references are decoded.
/// 3. Whitespace runs (tabs, newlines, no-break spaces) collapse to one space
///    and the ends are trimmed.
///
/// # Example
/// ```
/// use omeka_normalize::text::clean;
///
/// assert_eq!(clean("<b>Rights:&nbsp;Public</b>"), "Rights: Public");
/// ```
pub fn clean(text: &str) -> String {
    let without_tags = strip_tags(text);
    let decoded = decode_entities(&without_tags);
    collapse_whitespace(&decoded)
}

/// Replace each tag with a single space.
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(text, " ")
}

/// Decode HTML character references the way an HTML5 parser does.
///
/// - numeric references map C1 code points through Windows-1252; NUL,
///   surrogates and out-of-range values become U+FFFD, and noncharacters
///   and other control codes are dropped
/// - legacy names resolve without `;`, and a legacy name followed by more
///   letters resolves as its longest legacy prefix (`&copy2024` is `©2024`)
/// - named references that resolve to nothing are kept literally
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    CHARACTER_REFERENCE.replace_all(text, |caps: &Captures<'_>| {
        resolve_reference(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    })
}

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

fn resolve_reference(reference: &str) -> Option<String> {
    match reference.strip_prefix('#') {
        Some(number) => Some(resolve_numeric(number)),
        None => resolve_named(reference),
    }
}

fn resolve_numeric(number: &str) -> String {
    let digits = number.trim_end_matches(';');
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => digits.parse::<u32>(),
    }
    .unwrap_or(u32::MAX);
    numeric_character(code).map(String::from).unwrap_or_default()
}

/// `None` for code points that decode to nothing.
fn numeric_character(code: u32) -> Option<char> {
    match code {
        0x00 => Some(char::REPLACEMENT_CHARACTER),
        0x0D => Some('\r'),
        0x80..=0x9F => WINDOWS_1252_C1.get((code - 0x80) as usize).copied(),
        0xD800..=0xDFFF | 0x11_0000.. => Some(char::REPLACEMENT_CHARACTER),
        0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F | 0xFDD0..=0xFDEF => None,
        _ if code & 0xFFFE == 0xFFFE => None,
        _ => char::from_u32(code),
    }
}

fn resolve_named(reference: &str) -> Option<String> {
    match reference.strip_suffix(';') {
        Some(name) => {
            if let Some(value) = resolve_html5_entity(name) {
                return Some(value.to_string());
            }
        }
        None if is_legacy(reference) => {
            return resolve_html5_entity(reference).map(str::to_string);
        }
        None => {}
    }
    (2..reference.len()).rev().find_map(|end| {
        let prefix = reference.get(..end)?;
        let rest = reference.get(end..)?;
        if !is_legacy(prefix) {
            return None;
        }
        resolve_html5_entity(prefix).map(|value| format!("{value}{rest}"))
    })
}

fn is_legacy(name: &str) -> bool {
    LEGACY_ENTITIES.contains(&name)
}
