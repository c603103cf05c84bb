//! CSV header normalization.

const UTF8_BOM: char = '\u{feff}';

/// Normalizes a header name.
///
/// Only a leading byte order mark is removed. Names are otherwise kept as
/// written, including surrounding whitespace, since they must match the
/// configured column keys exactly.
pub fn normalize_header(value: &str) -> String {
    value.strip_prefix(UTF8_BOM).unwrap_or(value).to_string()
}
