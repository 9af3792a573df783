#![deny(unsafe_code)]

//! Canonical schema normalization.
//!
//! ```text
//! input Table ──► HeaderResolver ──► column copy ──► ValueTransform ──► canonical Table
//! ```

pub mod error;
pub mod normalizer;

pub use error::{NormalizeError, Result, ValueFailure};
pub use normalizer::{NormalizedTable, SchemaNormalizer, normalize};
