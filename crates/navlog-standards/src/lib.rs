#![deny(unsafe_code)]

//! Built-in alias table for vehicle instrument and event-log exports.

pub mod registry;

pub use registry::{BUILTIN_TABLE_VERSION, ROW_ID_COLUMN, load_builtin_alias_table};
