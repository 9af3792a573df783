//! Schema normalizer.
//!
//! Resolution happens once per table, from headers alone, before any cell is
//! read. The output holds exactly the canonical columns that resolved, in
//! declared order, plus the row identifier column which is always present
//! when the alias table declares one. Rows are never dropped, added or
//! reordered.

use tracing::debug;

use navlog_map::{HeaderResolver, ResolutionPlan};
use navlog_model::{AliasTable, CellValue, ColumnName, Row, Table, ValueTransform};
use navlog_transform::apply_transform;

use crate::error::{NormalizeError, Result, ValueFailure};

static MISSING: CellValue = CellValue::Missing;

/// A normalized table together with the resolution that produced it.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub table: Table,
    pub plan: ResolutionPlan,
}

/// Where an output column takes its values from.
#[derive(Debug, Clone, Copy)]
enum ColumnSource {
    Copy {
        index: usize,
        transform: ValueTransform,
    },
    RowIndex,
}

/// Rewrites tables into the canonical schema described by an alias table.
#[derive(Debug, Clone, Copy)]
pub struct SchemaNormalizer<'a> {
    aliases: &'a AliasTable,
}

impl<'a> SchemaNormalizer<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    /// Normalizes one table.
    ///
    /// A pure function of the input table and the alias table. If any cell of
    /// a transformed column cannot be interpreted, every such cell is
    /// reported and no output is produced.
    pub fn normalize(&self, input: &Table) -> Result<NormalizedTable> {
        let plan = HeaderResolver::new(&input.columns).resolve_table(self.aliases);

        let mut names: Vec<ColumnName> = Vec::new();
        let mut sources: Vec<ColumnSource> = Vec::new();
        for (spec, (name, resolution)) in self.aliases.columns().iter().zip(&plan.columns) {
            let is_row_id = self.aliases.is_row_id(name);
            let source = match resolution.source_index() {
                Some(index) => ColumnSource::Copy {
                    index,
                    // Row labels are opaque.
                    transform: if is_row_id {
                        ValueTransform::Identity
                    } else {
                        spec.transform
                    },
                },
                None if is_row_id => ColumnSource::RowIndex,
                None => continue,
            };
            names.push(name.clone());
            sources.push(source);
        }

        let mut output = Table::new(names.iter().map(ToString::to_string).collect());
        let mut failures = Vec::new();
        for (row_index, row) in input.rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(sources.len());
            for (source, name) in sources.iter().zip(&names) {
                let cell = match *source {
                    ColumnSource::RowIndex => CellValue::Text(row_index.to_string()),
                    ColumnSource::Copy { index, transform } => {
                        let raw = row.cells.get(index).unwrap_or(&MISSING);
                        match apply_transform(transform, raw) {
                            Ok(cell) => cell,
                            Err(error) => {
                                failures.push(ValueFailure {
                                    row: row_index,
                                    column: name.clone(),
                                    error,
                                });
                                CellValue::Missing
                            }
                        }
                    }
                };
                cells.push(cell);
            }
            output.push_row(Row::new(cells))?;
        }

        if !failures.is_empty() {
            return Err(NormalizeError::Values { failures, plan });
        }
        debug!(
            rows = output.row_count(),
            columns = output.column_count(),
            unresolved = plan.unresolved.len(),
            "normalized table"
        );
        Ok(NormalizedTable {
            table: output,
            plan,
        })
    }
}

/// Normalizes `input` against `aliases`. See [`SchemaNormalizer::normalize`].
pub fn normalize(input: &Table, aliases: &AliasTable) -> Result<NormalizedTable> {
    SchemaNormalizer::new(aliases).normalize(input)
}
