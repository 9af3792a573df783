//! Error types for input discovery and table loading.

use std::path::PathBuf;
use thiserror::Error;

use navlog_model::ModelError;

/// Errors that can occur while discovering or reading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension does not name a supported table format.
    #[error("unsupported table format: {path}")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// The delimited reader rejected the file.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File has no header row.
    #[error("file is empty: {path}")]
    EmptyTable { path: PathBuf },

    /// A data row has more fields than the header row.
    #[error("{path}: line {line} has {actual} fields, header has {expected}")]
    RowTooWide {
        path: PathBuf,
        line: u64,
        expected: usize,
        actual: usize,
    },

    #[error("{path}: {source}")]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

impl IngestError {
    pub(crate) fn parse(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DirectoryNotFound {
            path: PathBuf::from("/path/to/input"),
        };
        assert_eq!(err.to_string(), "directory not found: /path/to/input");

        let err = IngestError::RowTooWide {
            path: PathBuf::from("dive.csv"),
            line: 3,
            expected: 2,
            actual: 4,
        };
        assert_eq!(err.to_string(), "dive.csv: line 3 has 4 fields, header has 2");
    }
}
