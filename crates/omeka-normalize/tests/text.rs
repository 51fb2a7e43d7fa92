//! Tests for free-text cleanup.

use omeka_normalize::clean;
use proptest::prelude::*;

#[test]
fn clean_strips_tags_and_decodes_entities() {
    assert_eq!(clean("<b>Rights:&nbsp;Public</b>"), "Rights: Public");
}

#[test]
fn clean_handles_rights_markup() {
    let raw = "<p>The Library of Congress is not aware of any U.S. copyright \n\
               protection &amp; no known restrictions.</p>\t<p>Credit line: <i>Library of Congress</i></p>";
    assert_eq!(
        clean(raw),
        "The Library of Congress is not aware of any U.S. copyright protection & no known restrictions. Credit line: Library of Congress"
    );
}

#[test]
fn clean_decodes_legacy_references_without_semicolon() {
    assert_eq!(clean("&copy 1941"), "\u{a9} 1941");
    assert_eq!(clean("Tom &amp Jerry"), "Tom & Jerry");
    assert_eq!(clean("Rock &#39n roll"), "Rock 'n roll");
}

#[test]
fn clean_maps_c1_references_through_windows_1252() {
    assert_eq!(clean("1941&#150;1945"), "1941\u{2013}1945");
    assert_eq!(clean("&#x80;5"), "\u{20ac}5");
    assert_eq!(clean("&#147;Harbor&#148;"), "\u{201c}Harbor\u{201d}");
}

#[test]
fn clean_replaces_invalid_code_points() {
    assert_eq!(clean("a&#0;b"), "a\u{fffd}b");
    assert_eq!(clean("a&#xDC00;b"), "a\u{fffd}b");
    assert_eq!(clean("a &bogus; b"), "a &bogus; b");
}

#[test]
fn clean_keeps_unmatched_angle_brackets() {
    assert_eq!(clean("x < y"), "x < y");
    assert_eq!(clean("5 > 3"), "5 > 3");
    assert_eq!(clean("<>"), "<>");
}

#[test]
fn clean_of_default_sentinel_is_unchanged() {
    assert_eq!(clean("N/A"), "N/A");
}

#[test]
fn clean_of_blank_text_is_empty() {
    assert_eq!(clean(""), "");
    assert_eq!(clean(" \t\n "), "");
    assert_eq!(clean("<br/>"), "");
}

proptest! {
    #[test]
    fn plain_text_only_collapses_whitespace(text in "[A-Za-z0-9.,;: \t\n]{0,64}") {
        let expected = text.split_whitespace().collect::<Vec<_>>().join(" ");
        prop_assert_eq!(clean(&text), expected);
    }

    #[test]
    fn clean_is_idempotent(text in "[A-Za-z0-9<>/ \t\n]{0,64}") {
        let once = clean(&text);
        prop_assert_eq!(clean(&once), once.clone());
    }

    #[test]
    fn output_has_no_whitespace_runs(text in "[a-z<>&;# \t\n]{0,64}") {
        let cleaned = clean(&text);
        prop_assert!(!cleaned.contains("  "));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }
}
