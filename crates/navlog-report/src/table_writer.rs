//! Normalized table output.

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::debug;

use navlog_ingest::TableFormat;
use navlog_model::{CellValue, Table};

use crate::error::{ReportError, Result};
use crate::hash::sha256_hex;

/// A table written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub path: PathBuf,
    pub rows: usize,
    pub sha256: String,
}

/// Output path for `input`: `<stem><suffix>.<ext>` inside `output_dir`.
///
/// The extension is kept as written on the input file.
pub fn output_path(input: &Path, output_dir: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    output_dir.join(file_name)
}

/// Encodes `table` with the delimiter of `format`.
///
/// Missing cells are written as empty fields. Fields are quoted only when
/// they contain the delimiter, a quote or a line break.
pub fn encode_table(table: &Table, format: TableFormat) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.cells.iter().map(CellValue::as_output))?;
    }
    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

/// Writes `table` to `path` and returns its digest.
pub fn write_table(path: &Path, table: &Table, format: TableFormat) -> Result<WrittenTable> {
    let bytes = encode_table(table, format).map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, &bytes).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sha256 = sha256_hex(&bytes);
    debug!(path = %path.display(), rows = table.row_count(), %sha256, "wrote table");
    Ok(WrittenTable {
        path: path.to_path_buf(),
        rows: table.row_count(),
        sha256,
    })
}
