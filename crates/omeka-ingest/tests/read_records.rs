use std::fs;

use omeka_ingest::{IngestError, LoadedRecord, load_record, read_records};
use tempfile::TempDir;

fn metadata_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let files = [
        (
            "fsa.8d24709.json",
            r#"{"item": {"title": "Fishing boats", "item": {"control_number": "2017843202"}}}"#,
        ),
        ("highsm.64003.json", r#"{"item": {"title": "Skyline"}}"#),
        ("broken.json", r#"{"item": {"title": "#),
        ("no-item.json", r#"{"results": []}"#),
        ("array.json", "[1, 2]"),
        ("readme.txt", "not a record"),
    ];
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

#[test]
fn bad_documents_do_not_abort_the_batch() {
    let dir = metadata_dir();
    let batch = read_records(dir.path()).unwrap();

    assert_eq!(batch.document_count(), 5);
    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.failure_count(), 2);
    assert_eq!(batch.empty.len(), 1);

    let titles: Vec<String> = batch
        .records
        .iter()
        .map(|sourced| sourced.record.view().text_or("title", "N/A"))
        .collect();
    assert_eq!(titles, ["Fishing boats", "Skyline"]);
}

#[test]
fn failures_keep_their_cause() {
    let dir = metadata_dir();
    let batch = read_records(dir.path()).unwrap();

    let mut causes: Vec<(&str, bool)> = batch
        .failures
        .iter()
        .map(|failure| {
            let name = failure.path.file_name().and_then(|n| n.to_str()).unwrap();
            (name, matches!(failure.error, IngestError::Json { .. }))
        })
        .collect();
    causes.sort();
    assert_eq!(causes, [("array.json", false), ("broken.json", true)]);
}

#[test]
fn load_record_reads_nested_item() {
    let dir = metadata_dir();
    let loaded = load_record(&dir.path().join("fsa.8d24709.json")).unwrap();
    let LoadedRecord::Record(record) = loaded else {
        panic!("expected a record");
    };
    assert_eq!(
        record.view().nested("item").text("control_number").as_deref(),
        Some("2017843202")
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let error = load_record(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(error, IngestError::FileRead { .. }));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(read_records(&dir.path().join("missing")).is_err());
}
