//! Normalization functions for canonical output values.

pub mod datetime;
pub mod depth;

pub use datetime::{
    CANONICAL_TIMESTAMP_FORMAT, canonicalize_timestamp, format_canonical_timestamp,
    parse_timestamp,
};
pub use depth::correct_depth;
