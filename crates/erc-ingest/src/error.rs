//! Error types for report loading.

use std::path::PathBuf;
use thiserror::Error;

use erc_model::ModelError;

/// Errors that can occur while loading the source report.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File starts with a byte order mark for an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Format Errors ===
    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A data row does not have the same number of fields as the header.
    #[error("{path}: line {line} has {found} fields, header has {expected}")]
    FieldCount {
        path: PathBuf,
        line: u64,
        expected: u64,
        found: u64,
    },

    /// The header names the same column twice.
    #[error("duplicate column '{column}' in header of {path}")]
    DuplicateColumn { path: PathBuf, column: String },

    /// Any other CSV decoding failure (bad quoting, invalid UTF-8).
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The loaded row did not fit the record set.
    #[error("{path}: {source}")]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

impl IngestError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileNotFound { path }
            | Self::FileRead { path, .. }
            | Self::UnsupportedEncoding { path, .. }
            | Self::EmptyCsv { path }
            | Self::FieldCount { path, .. }
            | Self::DuplicateColumn { path, .. }
            | Self::CsvParse { path, .. }
            | Self::Model { path, .. } => path,
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
