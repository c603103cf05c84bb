//! Contact sheet output.
//!
//! Each surviving record is projected through the [`erc_model::HeaderMapping`]
//! and written as one CSV row under a single header row of output titles.
//! Every field is quoted, empty ones included, since the importer reading the
//! sheet expects it.
//!
//! Files are written to a temporary file beside the destination and renamed
//! into place, so a failed run never leaves a truncated output file.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{render_record_set, validate_mapping, write_record_set};
