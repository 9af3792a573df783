use thiserror::Error;

/// A cell value a transform could not interpret.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("unrecognized date/time value {value:?}")]
    Timestamp { value: String },

    #[error("depth value {value:?} is not a finite number")]
    Depth { value: String },
}

impl TransformError {
    pub fn value(&self) -> &str {
        match self {
            Self::Timestamp { value } | Self::Depth { value } => value,
        }
    }
}
