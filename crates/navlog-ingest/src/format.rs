use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{IngestError, Result};

/// Delimited table formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    /// Format for a path's extension (case-insensitive), if supported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("tsv") {
            Some(Self::Tsv)
        } else {
            None
        }
    }

    /// Like [`TableFormat::from_path`], but an unsupported extension is an error.
    pub fn detect(path: &Path) -> Result<Self> {
        Self::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }

    pub fn delimiter(self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(TableFormat::from_path(Path::new("a.csv")), Some(TableFormat::Csv));
        assert_eq!(TableFormat::from_path(Path::new("a.TSV")), Some(TableFormat::Tsv));
        assert_eq!(TableFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(TableFormat::from_path(Path::new("csv")), None);
        assert_eq!(TableFormat::Tsv.delimiter(), b'\t');
    }
}
