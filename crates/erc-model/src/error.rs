use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("column '{column}' is not part of the record set")]
    UnknownColumn { column: String },

    #[error("record has {found} columns, record set expects {expected}")]
    ColumnMismatch { expected: usize, found: usize },

    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
