#![deny(unsafe_code)]

//! Input side of the batch: file discovery and delimited table loading.

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod format;

pub use csv_table::read_table;
pub use discovery::{SourceFile, list_table_files};
pub use error::{IngestError, Result};
pub use format::TableFormat;
