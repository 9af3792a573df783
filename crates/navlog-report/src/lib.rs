#![deny(unsafe_code)]

//! Output side of the batch.
//!
//! - **Tables**: normalized tables written with the input's delimiter
//! - **Run report**: `navlog_report.json` describing every file of a batch

pub mod error;
pub mod hash;
pub mod run_report;
pub mod table_writer;

pub use error::{ReportError, Result};
pub use hash::sha256_hex;
pub use run_report::{
    FileReport, FileStatus, RUN_REPORT_FILE_NAME, ResolutionEntry, write_run_report,
};
pub use table_writer::{WrittenTable, encode_table, output_path, write_table};
