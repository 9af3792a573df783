//! Batch run report.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use navlog_ingest::TableFormat;
use navlog_map::ResolutionPlan;
use navlog_model::{ColumnName, ColumnResolution};

use crate::error::{ReportError, Result};

pub const RUN_REPORT_FILE_NAME: &str = "navlog_report.json";
const REPORT_SCHEMA: &str = "navlog.run-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Written,
    /// Normalized but not written (dry run).
    Checked,
    Failed,
}

/// Outcome of one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub format: TableFormat,
    pub status: FileStatus,
    pub rows_in: Option<usize>,
    pub rows_out: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resolutions: Vec<ResolutionEntry>,
    pub unresolved: Vec<ColumnName>,
    pub output: Option<PathBuf>,
    pub sha256: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl FileReport {
    pub fn new(input: impl Into<PathBuf>, format: TableFormat) -> Self {
        Self {
            input: input.into(),
            format,
            status: FileStatus::Failed,
            rows_in: None,
            rows_out: None,
            resolutions: Vec::new(),
            unresolved: Vec::new(),
            output: None,
            sha256: None,
            errors: Vec::new(),
        }
    }

    pub fn with_plan(mut self, plan: &ResolutionPlan) -> Self {
        self.resolutions = plan
            .columns
            .iter()
            .map(|(column, resolution)| ResolutionEntry {
                column: column.clone(),
                resolution: resolution.clone(),
            })
            .collect();
        self.unresolved = plan.unresolved.clone();
        self
    }

    pub fn is_failed(&self) -> bool {
        self.status == FileStatus::Failed
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolutionEntry {
    pub column: ColumnName,
    pub resolution: ColumnResolution,
}

#[derive(Debug, Serialize)]
struct RunReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    alias_table_version: &'a str,
    file_count: usize,
    failed_count: usize,
    files: &'a [FileReport],
}

/// Writes `navlog_report.json` into `output_dir` and returns its path.
pub fn write_run_report(
    output_dir: &Path,
    alias_table_version: &str,
    files: &[FileReport],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let output_path = output_dir.join(RUN_REPORT_FILE_NAME);
    let payload = RunReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        alias_table_version,
        file_count: files.len(),
        failed_count: files.iter().filter(|file| file.is_failed()).count(),
        files,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n")).map_err(|source| ReportError::Io {
        path: output_path.clone(),
        source,
    })?;
    Ok(output_path)
}
