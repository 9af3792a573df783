use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use navlog_cli::types::BatchResult;
use navlog_model::ColumnName;
use navlog_report::{FileReport, FileStatus};

pub fn print_summary(result: &BatchResult) {
    println!("Input: {}", result.input_dir.display());
    println!("Output: {}", result.output_dir.display());
    println!("Alias table: version {}", result.alias_table_version);
    if let Some(path) = &result.report {
        println!("Run report: {}", path.display());
    }
    if result.files.is_empty() {
        println!("No input files.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Resolved"),
        header_cell("Unresolved"),
        header_cell("Output"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);

    let mut total_rows = 0usize;
    for file in &result.files {
        total_rows += file.rows_out.unwrap_or(0);
        let resolved = file
            .resolutions
            .iter()
            .filter(|entry| entry.resolution.is_resolved())
            .count();
        table.add_row(vec![
            Cell::new(file_name(file))
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            optional_cell(file.rows_out),
            if file.resolutions.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(resolved)
            },
            unresolved_cell(file),
            match &file.output {
                Some(path) => Cell::new(path.display()),
                None => dim_cell("-"),
            },
            status_cell(file.status),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        failed_total_cell(result.failed_count()),
    ]);
    println!("{table}");

    let failed: Vec<&FileReport> = result.files.iter().filter(|file| file.is_failed()).collect();
    if !failed.is_empty() {
        eprintln!("Errors:");
        for file in failed {
            for error in &file.errors {
                eprintln!("- {}: {error}", file_name(file));
            }
        }
    }
}

fn file_name(file: &FileReport) -> String {
    file.input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.input.display().to_string())
}

fn unresolved_cell(file: &FileReport) -> Cell {
    if file.unresolved.is_empty() {
        return dim_cell("-");
    }
    let names: Vec<&str> = file.unresolved.iter().map(ColumnName::as_str).collect();
    Cell::new(names.join(", ")).fg(Color::Yellow)
}

fn status_cell(status: FileStatus) -> Cell {
    match status {
        FileStatus::Written => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        FileStatus::Checked => Cell::new("checked").fg(Color::Green),
        FileStatus::Failed => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn failed_total_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(format!("{count} failed"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("ok")
    }
}

fn optional_cell(value: Option<usize>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
