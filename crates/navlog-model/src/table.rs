#![deny(unsafe_code)]

use crate::error::{ModelError, Result};

static MISSING: CellValue = CellValue::Missing;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Wraps a raw cell; only an empty cell counts as missing.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Self::Missing
        } else {
            Self::Text(raw.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Text written to a delimited file; missing cells are written empty.
    pub fn as_output(&self) -> &str {
        self.as_text().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }
}

/// A row-major table of named columns.
///
/// Input tables carry the raw source headers; output tables carry canonical
/// column names. Row order is significant and never changed by normalization.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.cells.len() != self.columns.len() {
            return Err(ModelError::RowWidth {
                expected: self.columns.len(),
                actual: row.cells.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cells of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows
            .iter()
            .map(move |row| row.cells.get(index).unwrap_or(&MISSING))
    }

    /// Cells of a named column, or `None` if the column is absent.
    pub fn column(&self, name: &str) -> Option<Vec<&CellValue>> {
        self.column_index(name)
            .map(|index| self.column_values(index).collect())
    }
}
