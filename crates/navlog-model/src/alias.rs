//! Alias tables: canonical output columns and the source spellings that feed them.
//!
//! A table is the one piece of the system expected to change as new vehicles
//! and tool versions appear, so it is plain data. Column order is part of the
//! output contract: the declared order is the order columns are written in.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::ColumnName;

/// Per-column value transform, selected by the canonical column it is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTransform {
    /// Copy the source value unchanged.
    #[default]
    Identity,
    /// Canonicalize a free-form date/time to `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    Timestamp,
    /// Force depth values to be non-positive.
    Depth,
}

impl ValueTransform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Timestamp => "timestamp",
            Self::Depth => "depth",
        }
    }
}

/// One canonical column with its ordered alias list.
///
/// Alias order is priority order: the first alias present in an input file wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: ColumnName,
    pub aliases: Vec<String>,
    #[serde(default)]
    pub transform: ValueTransform,
}

impl ColumnSpec {
    pub fn new<I, S>(name: &str, aliases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = ColumnName::new(name)?;
        let aliases: Vec<String> = aliases
            .into_iter()
            .map(|alias| alias.as_ref().trim().to_string())
            .filter(|alias| !alias.is_empty())
            .collect();
        if aliases.is_empty() {
            return Err(ModelError::NoAliases(name.to_string()));
        }
        Ok(Self {
            name,
            aliases,
            transform: ValueTransform::Identity,
        })
    }

    #[must_use]
    pub fn with_transform(mut self, transform: ValueTransform) -> Self {
        self.transform = transform;
        self
    }
}

/// An immutable, versioned mapping of canonical column to ordered aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasTable {
    version: String,
    row_id: Option<ColumnName>,
    columns: Vec<ColumnSpec>,
}

impl AliasTable {
    /// Builds a table, validating that canonical names are unique
    /// (case-insensitively) and that the row identifier, if any, is declared.
    pub fn new(
        version: impl Into<String>,
        columns: Vec<ColumnSpec>,
        row_id: Option<&str>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str().to_lowercase()) {
                return Err(ModelError::DuplicateColumn(column.name.to_string()));
            }
        }
        let row_id = match row_id {
            Some(raw) => {
                let spec = columns
                    .iter()
                    .find(|column| column.name.as_str().eq_ignore_ascii_case(raw.trim()))
                    .ok_or_else(|| ModelError::UnknownRowId(raw.to_string()))?;
                Some(spec.name.clone())
            }
            None => None,
        };
        Ok(Self {
            version: version.into(),
            row_id,
            columns,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Canonical columns in declared (output) order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &ColumnName> {
        self.columns.iter().map(|column| &column.name)
    }

    /// Case-insensitive lookup of a canonical column.
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        let name = name.trim();
        self.columns
            .iter()
            .find(|column| column.name.as_str().eq_ignore_ascii_case(name))
    }

    /// The designated row-identifier column, if the table declares one.
    pub fn row_id(&self) -> Option<&ColumnName> {
        self.row_id.as_ref()
    }

    pub fn is_row_id(&self, name: &ColumnName) -> bool {
        self.row_id.as_ref() == Some(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
