//! Input file discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::format::TableFormat;

/// A discovered input file and the format its extension selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub format: TableFormat,
}

impl SourceFile {
    /// File name for logs and reports.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
    }
}

/// Lists the `.csv` and `.tsv` files directly inside `dir`.
///
/// Subdirectories and other extensions are skipped. Returns files sorted by
/// file name so batch order does not depend on the file system.
pub fn list_table_files(dir: &Path) -> Result<Vec<SourceFile>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match TableFormat::from_path(&path) {
            Some(format) => files.push(SourceFile { path, format }),
            None => debug!(path = %path.display(), "skipping file with unsupported extension"),
        }
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(files)
}
