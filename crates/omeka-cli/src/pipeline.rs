//! Ingest → map → write.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use omeka_ingest::{LoadedRecord, load_record, read_records};
use omeka_map::{MappedRecord, RecordMapper};
use omeka_output::{ImportRow, write_csv};
use tracing::{info, info_span, warn};

use crate::config::Settings;
use crate::types::{BuildResult, DocumentError, RecordIssues};

/// Map every record under `settings.metadata_dir` and write the import CSV.
///
/// Unreadable documents are reported in the result, not raised. With
/// `dry_run` nothing is written.
///
/// # Errors
///
/// Fails when the directory cannot be listed or the CSV cannot be written,
/// including when there are no records to write.
pub fn run_build(settings: &Settings, dry_run: bool) -> Result<BuildResult> {
    let span = info_span!("build", metadata_dir = %settings.metadata_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let batch = read_records(&settings.metadata_dir)
        .with_context(|| format!("read metadata from {}", settings.metadata_dir.display()))?;

    let mapper = RecordMapper::new();
    let mut rows = Vec::with_capacity(batch.records.len());
    let mut issues = Vec::new();
    for sourced in &batch.records {
        let mapped = mapper.map(&sourced.record);
        for issue in &mapped.issues {
            warn!(
                path = %sourced.path.display(),
                field = issue.field,
                message = %issue.message,
                "field replaced by default"
            );
        }
        rows.push(ImportRow::from_record(
            &mapped.record,
            &sourced.path,
            &settings.row,
        ));
        if mapped.has_issues() {
            issues.push(RecordIssues {
                path: sourced.path.clone(),
                issues: mapped.issues,
            });
        }
    }

    let output = if dry_run {
        info!(rows = rows.len(), "dry run, skipping csv output");
        None
    } else {
        write_csv(&settings.output, &rows)
            .with_context(|| format!("write {}", settings.output.display()))?;
        Some(settings.output.clone())
    };

    let failures = batch
        .failures
        .iter()
        .map(|failure| DocumentError {
            path: failure.path.clone(),
            message: failure.error.to_string(),
        })
        .collect();

    info!(
        documents = batch.document_count(),
        rows = rows.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "build complete"
    );

    Ok(BuildResult {
        metadata_dir: settings.metadata_dir.clone(),
        output,
        documents: batch.document_count(),
        rows: rows.len(),
        empty: batch.empty,
        failures,
        issues,
    })
}

/// Load and map a single record document.
///
/// # Errors
///
/// Fails when the document cannot be read or has no `item` data.
pub fn inspect_record(path: &Path) -> Result<MappedRecord> {
    match load_record(path).with_context(|| format!("load {}", path.display()))? {
        LoadedRecord::Record(record) => Ok(RecordMapper::new().map(&record)),
        LoadedRecord::Empty => bail!("{} has no item data", path.display()),
    }
}
