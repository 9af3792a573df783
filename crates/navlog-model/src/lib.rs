//! Data model for canonical schema normalization.
//!
//! - [`AliasTable`]: canonical columns, their ordered aliases and transforms
//! - [`Table`]: row-major tables used for both input and output
//! - [`ColumnResolution`]: header-level match result for one canonical column

pub mod alias;
pub mod error;
pub mod ids;
pub mod resolution;
pub mod table;

pub use alias::{AliasTable, ColumnSpec, ValueTransform};
pub use error::{ModelError, Result};
pub use ids::ColumnName;
pub use resolution::ColumnResolution;
pub use table::{CellValue, Row, Table};
