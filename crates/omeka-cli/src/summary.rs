use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use omeka_map::MappedRecord;
use omeka_model::{CanonicalField, FieldValue, join_tokens};
use omeka_output::RowOptions;

use omeka_cli::types::BuildResult;

pub fn print_summary(result: &BuildResult) {
    println!("Metadata: {}", result.metadata_dir.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Documents"), Cell::new(result.documents)]);
    table.add_row(vec![
        Cell::new("Rows"),
        Cell::new(result.rows)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Empty"),
        count_cell(result.empty.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unreadable"),
        count_cell(result.failures.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Field issues"),
        count_cell(result.issue_count(), Color::Yellow),
    ]);
    println!("{table}");

    print_issue_table(result);
    if result.has_errors() {
        eprintln!("Unreadable documents:");
        for failure in &result.failures {
            eprintln!("- {}: {}", file_label(&failure.path), failure.message);
        }
    }
}

fn print_issue_table(result: &BuildResult) {
    if result.issues.is_empty() && result.empty.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for record in &result.issues {
        for issue in &record.issues {
            table.add_row(vec![
                Cell::new(file_label(&record.path)),
                Cell::new(issue.field).fg(Color::Yellow),
                Cell::new(&issue.message),
            ]);
        }
    }
    for path in &result.empty {
        table.add_row(vec![
            Cell::new(file_label(path)),
            dim_cell("-"),
            dim_cell("no item data"),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

/// Canonical columns of one mapped record.
pub fn print_record(path: &Path, mapped: &MappedRecord, options: &RowOptions) {
    println!("Record: {}", path.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Value")]);
    apply_table_style(&mut table);
    for field in CanonicalField::ALL {
        let value = match mapped.record.value(field) {
            FieldValue::Text(text) => Cell::new(text),
            FieldValue::Dates(tokens) if tokens.is_empty() => dim_cell("(none)"),
            FieldValue::Dates(tokens) => Cell::new(join_tokens(tokens, &options.list_separator)),
            FieldValue::Missing => dim_cell("(empty)"),
        };
        table.add_row(vec![
            Cell::new(options.column_name(field)).fg(Color::Blue),
            value,
        ]);
    }
    println!("{table}");
    for issue in &mapped.issues {
        eprintln!("warning: {}: {}", issue.field, issue.message);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
