//! Header resolver implementation.

use serde::Serialize;
use tracing::{debug, warn};

use navlog_model::{AliasTable, ColumnName, ColumnResolution, ColumnSpec};

use crate::utils::fold_header;

/// Resolution of every canonical column for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionPlan {
    /// One entry per canonical column, in the alias table's declared order.
    pub columns: Vec<(ColumnName, ColumnResolution)>,
    /// Canonical columns with no matching header, excluding the row identifier.
    pub unresolved: Vec<ColumnName>,
}

impl ResolutionPlan {
    pub fn get(&self, name: &ColumnName) -> Option<&ColumnResolution> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, resolution)| resolution)
    }

    pub fn resolved_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|(_, resolution)| resolution.is_resolved())
            .count()
    }
}

/// Matches canonical columns against the headers of one input file.
///
/// Matching is a deterministic priority scan: aliases are tried in declared
/// order and the first alias present among the headers wins. Comparison is
/// case-insensitive and ignores surrounding whitespace. When several headers
/// fold to the same alias, the leftmost one is taken.
pub struct HeaderResolver {
    folded: Vec<String>,
    headers: Vec<String>,
}

impl HeaderResolver {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|header| header.as_ref().to_string())
            .collect();
        let folded = headers.iter().map(|header| fold_header(header)).collect();
        Self { folded, headers }
    }

    pub fn resolve(&self, column: &ColumnSpec) -> ColumnResolution {
        for alias in &column.aliases {
            let alias = fold_header(alias);
            if let Some(index) = self.folded.iter().position(|header| *header == alias) {
                return ColumnResolution::Resolved {
                    header: self.headers[index].clone(),
                    index,
                };
            }
        }
        ColumnResolution::Unresolved
    }

    /// Resolves every canonical column of `aliases`, in declared order.
    ///
    /// Emits one warning per unresolved column other than the row identifier.
    pub fn resolve_table(&self, aliases: &AliasTable) -> ResolutionPlan {
        let mut columns = Vec::with_capacity(aliases.len());
        let mut unresolved = Vec::new();
        for spec in aliases.columns() {
            let resolution = self.resolve(spec);
            match &resolution {
                ColumnResolution::Resolved { header, index } => {
                    debug!(
                        column = %spec.name,
                        source_header = %header,
                        source_index = index,
                        "resolved column"
                    );
                }
                ColumnResolution::Unresolved if aliases.is_row_id(&spec.name) => {
                    debug!(column = %spec.name, "row identifier not in source, using row index");
                }
                ColumnResolution::Unresolved => {
                    warn!(column = %spec.name, "no source header for column");
                    unresolved.push(spec.name.clone());
                }
            }
            columns.push((spec.name.clone(), resolution));
        }
        ResolutionPlan {
            columns,
            unresolved,
        }
    }
}

/// Resolves a single canonical column against a header list.
pub fn resolve<S: AsRef<str>>(column: &ColumnSpec, headers: &[S]) -> ColumnResolution {
    HeaderResolver::new(headers).resolve(column)
}

/// Resolves every canonical column of `aliases` against a header list.
pub fn resolve_table<S: AsRef<str>>(aliases: &AliasTable, headers: &[S]) -> ResolutionPlan {
    HeaderResolver::new(headers).resolve_table(aliases)
}
