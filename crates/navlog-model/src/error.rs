use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("canonical column name must not be empty")]
    EmptyColumnName,
    #[error("duplicate canonical column: {0}")]
    DuplicateColumn(String),
    #[error("canonical column {0} has no aliases")]
    NoAliases(String),
    #[error("row identifier column {0} is not declared in the alias table")]
    UnknownRowId(String),
    #[error("row has {actual} cells, table has {expected} columns")]
    RowWidth { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
