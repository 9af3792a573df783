//! Batch pipeline: discover, read, normalize and write each input file.
//!
//! A failure in one file is recorded in its [`FileReport`] and the batch moves
//! on. Only a missing input directory or an unusable output directory stop
//! the run.

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use navlog_core::{NormalizeError, normalize};
use navlog_ingest::{SourceFile, list_table_files, read_table};
use navlog_model::AliasTable;
use navlog_report::{FileReport, FileStatus, output_path, write_run_report, write_table};

use crate::types::{BatchOptions, BatchResult};

pub fn run_batch(options: &BatchOptions, aliases: &AliasTable) -> Result<BatchResult> {
    let files = list_table_files(&options.input_dir)
        .with_context(|| format!("scan input directory {}", options.input_dir.display()))?;
    if files.is_empty() {
        warn!(input_dir = %options.input_dir.display(), "no .csv or .tsv files found");
    }
    if !options.dry_run {
        std::fs::create_dir_all(&options.output_dir).with_context(|| {
            format!("create output directory {}", options.output_dir.display())
        })?;
    }

    let reports: Vec<FileReport> = files
        .iter()
        .map(|source| process_file(source, options, aliases))
        .collect();

    let report = if options.write_report && !options.dry_run {
        let path = write_run_report(&options.output_dir, aliases.version(), &reports)
            .context("write run report")?;
        info!(path = %path.display(), "wrote run report");
        Some(path)
    } else {
        None
    };

    let has_errors = reports.iter().any(FileReport::is_failed);
    Ok(BatchResult {
        input_dir: options.input_dir.clone(),
        output_dir: options.output_dir.clone(),
        alias_table_version: aliases.version().to_string(),
        files: reports,
        report,
        has_errors,
    })
}

/// Processes one input file. Never fails; errors land in the report.
pub fn process_file(
    source: &SourceFile,
    options: &BatchOptions,
    aliases: &AliasTable,
) -> FileReport {
    let span = info_span!("file", file = %source.file_name());
    let _guard = span.enter();
    info!("processing file");

    let mut report = FileReport::new(&source.path, source.format);
    let table = match read_table(&source.path, source.format) {
        Ok(table) => table,
        Err(err) => {
            error!(error = %err, "failed to read file");
            report.errors.push(err.to_string());
            return report;
        }
    };
    report.rows_in = Some(table.row_count());

    let normalized = match normalize(&table, aliases) {
        Ok(normalized) => normalized,
        Err(NormalizeError::Values { failures, plan }) => {
            report = report.with_plan(&plan);
            error!(failures = failures.len(), "values could not be transformed");
            report
                .errors
                .extend(failures.iter().map(ToString::to_string));
            return report;
        }
        Err(err) => {
            error!(error = %err, "normalization failed");
            report.errors.push(err.to_string());
            return report;
        }
    };
    report = report.with_plan(&normalized.plan);
    report.rows_out = Some(normalized.table.row_count());

    if options.dry_run {
        report.status = FileStatus::Checked;
        return report;
    }

    let path = output_path(&source.path, &options.output_dir, &options.suffix);
    match write_table(&path, &normalized.table, source.format) {
        Ok(written) => {
            info!(output = %written.path.display(), rows = written.rows, "wrote output");
            report.status = FileStatus::Written;
            report.output = Some(written.path);
            report.sha256 = Some(written.sha256);
        }
        Err(err) => {
            error!(error = %err, "failed to write output");
            report.errors.push(err.to_string());
        }
    }
    report
}
