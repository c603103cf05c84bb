//! Item title truncation (`modify_description`).

use erc_model::{CellValue, RecordSet};
use erc_model::columns::ITEM_TITLE;

use crate::error::Result;
use crate::stage::{Stage, StageOutput, overwrite, require_text};

/// Maximum item title length kept in the address column.
pub const DEFAULT_TITLE_LENGTH: usize = 23;

/// Cuts one text column down to a fixed number of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateField {
    field: String,
    max_chars: usize,
}

impl TruncateField {
    pub const NAME: &'static str = "modify_description";

    pub fn new(field: impl Into<String>, max_chars: usize) -> Self {
        Self {
            field: field.into(),
            max_chars,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }
}

impl Default for TruncateField {
    fn default() -> Self {
        Self::new(ITEM_TITLE, DEFAULT_TITLE_LENGTH)
    }
}

/// First `max_chars` characters of `value`.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
/// Shorter values are returned unchanged.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

impl Stage for TruncateField {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, mut records: RecordSet) -> Result<StageOutput> {
        let mut modified = 0;
        for (row, record) in records.iter_mut().enumerate() {
            let value = require_text(record, Self::NAME, &self.field, row)?;
            let truncated = truncate_chars(value, self.max_chars);
            if truncated.len() == value.len() {
                continue;
            }
            let truncated = truncated.to_string();
            overwrite(record, Self::NAME, &self.field, CellValue::Text(truncated))?;
            modified += 1;
        }
        Ok(StageOutput {
            records,
            modified,
            nulled: 0,
        })
    }
}
