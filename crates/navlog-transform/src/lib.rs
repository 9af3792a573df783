//! Value transforms applied while copying a resolved column.
//!
//! - **datetime**: permissive date/time parsing, canonical `...T..:..:..mmmZ` output
//! - **depth**: depth sign correction (below surface is negative)
//! - **apply**: dispatch from a column's [`ValueTransform`](navlog_model::ValueTransform)
//!
//! Every transform works on one cell at a time; no state is carried across
//! rows or columns.

pub mod apply;
pub mod error;
pub mod normalization;

pub use apply::apply_transform;
pub use error::TransformError;
pub use normalization::{
    CANONICAL_TIMESTAMP_FORMAT, canonicalize_timestamp, correct_depth, format_canonical_timestamp,
    parse_timestamp,
};
