//! Record model for the eBay report converter.
//!
//! This crate holds the types every pipeline stage shares:
//!
//! - [`CellValue`], [`Record`] and [`RecordSet`]: the in-memory table loaded
//!   from the source report
//! - [`OutputColumn`] and [`HeaderMapping`]: the output header, kept as data
//!   so it can be loaded from configuration
//! - [`columns`]: the source column names the fixed pipeline reads

pub mod columns;
mod error;
mod mapping;
mod record;

// === Error Types ===
pub use error::{ModelError, Result};

// === Records ===
pub use record::{CellValue, Record, RecordSet};

// === Output Header ===
pub use mapping::{HeaderMapping, OutputColumn};
