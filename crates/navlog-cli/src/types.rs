use std::path::PathBuf;

use navlog_report::FileReport;

/// Settings for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory scanned for `.csv` and `.tsv` files (not recursive).
    pub input_dir: PathBuf,
    /// Directory receiving normalized tables and the run report.
    pub output_dir: PathBuf,
    /// Appended to each input file stem to name its output.
    pub suffix: String,
    /// Normalize every file but write nothing.
    pub dry_run: bool,
    /// Write `navlog_report.json` after the batch.
    pub write_report: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            suffix: "_processed".to_string(),
            dry_run: false,
            write_report: true,
        }
    }
}

#[derive(Debug)]
pub struct BatchResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub alias_table_version: String,
    pub files: Vec<FileReport>,
    pub report: Option<PathBuf>,
    pub has_errors: bool,
}

impl BatchResult {
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|file| file.is_failed()).count()
    }
}
