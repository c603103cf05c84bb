//! Source report reading.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{read_record_set, validate_encoding};
