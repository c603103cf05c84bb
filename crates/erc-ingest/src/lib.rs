//! Report loading.
//!
//! This crate reads the source eBay report (a UTF-8 CSV file whose first line
//! is the header) into an [`erc_model::RecordSet`]. Loading is a single
//! blocking call that returns the completed record set; nothing downstream
//! sees partial data.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use erc_ingest::read_record_set;
//!
//! let records = read_record_set(Path::new("input/input-file.csv"))?;
//! println!("{} rows", records.len());
//! ```

mod error;
mod report;

// === Error Types ===
pub use error::{IngestError, Result};

// === Report Reading ===
pub use report::{normalize_header, read_record_set, validate_encoding};
