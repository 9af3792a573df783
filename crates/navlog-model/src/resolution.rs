use serde::Serialize;

/// Outcome of matching one canonical column against an input file's headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ColumnResolution {
    /// Matched the source header at input-column position `index`.
    Resolved { header: String, index: usize },
    Unresolved,
}

impl ColumnResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn source_index(&self) -> Option<usize> {
        match self {
            Self::Resolved { index, .. } => Some(*index),
            Self::Unresolved => None,
        }
    }

    pub fn header(&self) -> Option<&str> {
        match self {
            Self::Resolved { header, .. } => Some(header),
            Self::Unresolved => None,
        }
    }
}
