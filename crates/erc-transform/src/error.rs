//! Error types for transformation stages.

use thiserror::Error;

use erc_model::ModelError;

/// Errors raised by a transformation stage.
///
/// Every variant names the stage that failed. `row` is the zero-based
/// position of the record within the record set the stage received.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The record has no such column.
    #[error("{stage}: column '{field}' is missing (row {row})")]
    FieldMissing {
        stage: &'static str,
        field: String,
        row: usize,
    },

    /// The column holds a null instead of text.
    #[error("{stage}: column '{field}' is not text (row {row})")]
    NotText {
        stage: &'static str,
        field: String,
        row: usize,
    },

    /// Writing the new value back into the record failed.
    #[error("{stage}: {source}")]
    Model {
        stage: &'static str,
        #[source]
        source: ModelError,
    },
}

impl TransformError {
    /// Name of the stage that raised the error.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::FieldMissing { stage, .. }
            | Self::NotText { stage, .. }
            | Self::Model { stage, .. } => stage,
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
