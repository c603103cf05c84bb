//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the output file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The header mapping has no columns.
    #[error("header mapping has no output columns")]
    EmptyMapping,

    /// A mapped source column is not in the record set.
    #[error("output column '{title}' reads unknown source column '{column}'")]
    UnknownSourceColumn { column: String, title: String },

    /// The destination directory does not exist.
    #[error("output directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to create or write the temporary output file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move the finished file into place.
    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to serialize CSV: {message}")]
    Serialize { message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
