//! CSV serialization of import rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::error::{OutputError, Result};
use crate::row::ImportRow;

/// Write `rows` as CSV to `writer`.
///
/// The header comes from the first row. Later rows are aligned to it by
/// column name; a column the header lacks is an error, a column a row lacks
/// is written empty.
///
/// Returns the number of data rows written.
pub fn write_rows<W: Write>(writer: W, rows: &[ImportRow]) -> Result<usize> {
    let first = rows.first().ok_or(OutputError::NoRows)?;
    let header: Vec<&str> = first.columns().collect();

    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(&header)?;

    for (index, row) in rows.iter().enumerate() {
        if let Some(column) = row.columns().find(|column| !header.contains(column)) {
            return Err(OutputError::UnexpectedColumn {
                row: index,
                column: column.to_string(),
            });
        }
        let values = header.iter().map(|column| row.get(column).unwrap_or(""));
        csv.write_record(values)?;
    }

    csv.flush()?;
    Ok(rows.len())
}

/// Write `rows` to a CSV file at `path`, replacing any existing file.
pub fn write_csv(path: &Path, rows: &[ImportRow]) -> Result<usize> {
    let file = File::create(path).map_err(|e| OutputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let written = write_rows(file, rows)?;
    info!(path = %path.display(), rows = written, "wrote import csv");
    Ok(written)
}
