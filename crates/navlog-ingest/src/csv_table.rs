use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use navlog_model::{CellValue, Row, Table};

use crate::error::{IngestError, Result};
use crate::format::TableFormat;

/// Reads a delimited file into a [`Table`].
///
/// The first record is the header row; headers are kept exactly as written.
/// Short rows are padded with missing cells and a row wider than the header
/// fails the file. Every record becomes a row, including one whose only
/// field is empty.
pub fn read_table(path: &Path, format: TableFormat) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::parse(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::parse(path, e))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let width = headers.len();
    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::parse(path, e))?;
        if record.len() > width {
            return Err(IngestError::RowTooWide {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                expected: width,
                actual: record.len(),
            });
        }
        let mut cells: Vec<CellValue> = record.iter().map(CellValue::from_raw).collect();
        cells.resize(width, CellValue::Missing);
        table
            .push_row(Row::new(cells))
            .map_err(|source| IngestError::Model {
                path: path.to_path_buf(),
                source,
            })?;
    }

    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "read table"
    );
    Ok(table)
}
