//! Library side of the `navlog` binary: logging setup and the batch pipeline.

pub mod logging;
pub mod pipeline;
pub mod types;
