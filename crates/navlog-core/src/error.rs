use std::fmt;

use thiserror::Error;

use navlog_map::ResolutionPlan;
use navlog_model::{ColumnName, ModelError};
use navlog_transform::TransformError;

/// One cell a column transform rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFailure {
    /// Zero-based data row index.
    pub row: usize,
    pub column: ColumnName,
    pub error: TransformError,
}

impl fmt::Display for ValueFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}: {}", self.row, self.column, self.error)
    }
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Every rejected cell in the table, in row-major order, with the
    /// resolution the table was read under.
    #[error(
        "{} value(s) could not be transformed, first at {}",
        failures.len(),
        first_failure(failures)
    )]
    Values {
        failures: Vec<ValueFailure>,
        plan: ResolutionPlan,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

fn first_failure(failures: &[ValueFailure]) -> String {
    failures
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
