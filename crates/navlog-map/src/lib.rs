#![deny(unsafe_code)]

//! Header-level matching of source files onto the canonical schema.

pub mod resolver;
pub mod utils;

pub use resolver::{HeaderResolver, ResolutionPlan, resolve, resolve_table};
pub use utils::fold_header;
