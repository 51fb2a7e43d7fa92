//! Integration tests for record mapping.

use omeka_map::{RecordMapper, map_record};
use omeka_model::{DateToken, RawRecord};
use serde_json::{Value, json};

fn raw(value: Value) -> RawRecord {
    RawRecord::from_value(value).expect("record object")
}

fn photograph() -> RawRecord {
    raw(json!({
        "title": "Fishing boats at dusk",
        "created_published_date": "1941 Sept.",
        "description": ["1 negative : nitrate. | Boats moored in the harbor."],
        "contributor_names": ["Lee, Russell, 1903-1986, photographer", "United States. Farm Security Administration"],
        "link": "https://www.loc.gov/item/2017843202/",
        "mime_type": "image/tiff",
        "medium": ["1 negative : nitrate ; 4 x 5 inches or smaller"],
        "subject_headings": ["harbors", "fishing boats"],
        "language": ["english"],
        "rights_advisory": "No known restrictions. For information, see U.S. Farm Security Administration/Office of War Information Black & White Photographs",
        "rights_information": "ignored when advisory present",
        "rights": "<p>The Library of Congress is not aware of any&nbsp;copyright.</p>",
        "item": {
            "control_number": "2017843202",
            "notes": ["Title from FSA caption.", "Temp. note"]
        }
    }))
}

#[test]
fn maps_full_record() {
    let record = map_record(&photograph());

    assert_eq!(record.title, "Fishing boats at dusk");
    assert_eq!(
        record.created,
        vec![DateToken::year("1941"), DateToken::year_month("1941", 9)]
    );
    assert_eq!(record.description, "Boats moored in the harbor.");
    assert_eq!(
        record.contributor,
        "Lee, Russell, 1903-1986, photographer;United States. Farm Security Administration"
    );
    assert_eq!(record.identifier.as_deref(), Some("2017843202"));
    assert_eq!(record.location_url, "https://www.loc.gov/item/2017843202/");
    assert_eq!(record.media_type, "image/tiff");
    assert_eq!(record.physical_extent, "1 negative;4 x 5 inches or smaller");
    assert_eq!(record.physical_form, "nitrate");
    assert_eq!(record.subject, "harbors;fishing boats");
    assert_eq!(record.language, "english");
    assert!(
        record
            .access_condition
            .as_deref()
            .is_some_and(|text| text.starts_with("No known restrictions."))
    );
    assert_eq!(
        record.rights,
        "The Library of Congress is not aware of any copyright."
    );
}

#[test]
fn empty_record_yields_defaults() {
    let mapped = RecordMapper::new().map(&RawRecord::default());
    let record = mapped.record;

    assert_eq!(record.title, "N/A");
    assert!(record.created.is_empty());
    assert_eq!(record.description, "N/A");
    assert_eq!(record.contributor, "N/A");
    assert_eq!(record.identifier, None);
    assert_eq!(record.location_url, "N/A");
    assert_eq!(record.media_type, "N/A");
    assert_eq!(record.physical_extent, "N/A");
    assert_eq!(record.physical_form, "N/A");
    assert_eq!(record.subject, "N/A");
    assert_eq!(record.language, "N/A");
    assert_eq!(record.access_condition, None);
    assert_eq!(record.rights, "N/A");

    let fields: Vec<&str> = mapped.issues.iter().map(|issue| issue.field).collect();
    assert_eq!(fields, ["physicalExtent", "physicalForm"]);
}

#[test]
fn description_falls_back_to_notes() {
    let record = map_record(&raw(json!({
        "description": ["Photograph of a harbor."],
        "medium": ["1 negative"],
        "item": { "notes": ["Title from caption.", "Gift of the photographer."] }
    })));
    assert_eq!(
        record.description,
        "Title from caption. Gift of the photographer."
    );
}

#[test]
fn malformed_medium_does_not_affect_other_fields() {
    let mapped = RecordMapper::new().map(&raw(json!({
        "title": "Survey map",
        "created_published_date": "between 1900 and 1905",
        "medium": ["1 map:color"]
    })));

    assert!(mapped.has_issues());
    assert!(mapped.issues.iter().any(|issue| issue.field == "physicalForm"));
    assert_eq!(mapped.record.title, "Survey map");
    assert_eq!(mapped.record.physical_extent, "N/A");
    assert_eq!(mapped.record.physical_form, "N/A");
    assert!(mapped.record.created.iter().any(|token| token == "1900/1905"));
}

#[test]
fn multi_valued_medium_is_joined() {
    let record = map_record(&raw(json!({
        "medium": ["1 print", "8 x 10 in."]
    })));
    assert_eq!(record.physical_extent, "1 print;8 x 10 in.");
    assert_eq!(record.physical_form, "N/A");
}

#[test]
fn null_and_mistyped_fields_use_defaults() {
    let record = map_record(&raw(json!({
        "title": null,
        "link": { "unexpected": true },
        "language": "english",
        "contributor_names": [],
        "rights_advisory": null,
        "rights_information": "Rights status not evaluated.",
        "medium": ["1 photograph"]
    })));
    assert_eq!(record.title, "N/A");
    assert_eq!(record.location_url, "N/A");
    assert_eq!(record.language, "english");
    assert_eq!(record.contributor, "");
    assert_eq!(
        record.access_condition.as_deref(),
        Some("Rights status not evaluated.")
    );
}

#[test]
fn mapping_is_deterministic() {
    let source = photograph();
    assert_eq!(map_record(&source), map_record(&source));
}

#[test]
fn mapper_is_shareable_across_threads() {
    let mapper = RecordMapper::new();
    let source = photograph();
    let expected = mapper.map(&source);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| mapper.map(&source)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("mapper thread"), expected);
        }
    });
}
