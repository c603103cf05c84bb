//! Buyer name deduplication (`modify_names`).

use std::collections::BTreeSet;

use erc_model::{CellValue, RecordSet};
use erc_model::columns::BUYER_NAME;

use crate::error::Result;
use crate::stage::{Stage, StageOutput, overwrite, require_text};

/// Keeps the first occurrence of each name, minus its last word, and nulls
/// every later occurrence.
///
/// Duplicates are detected on the original full value across the whole record
/// set. Records are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupeNames {
    field: String,
}

impl DedupeNames {
    pub const NAME: &'static str = "modify_names";

    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Default for DedupeNames {
    fn default() -> Self {
        Self::new(BUYER_NAME)
    }
}

/// Drops the final space-separated token.
///
/// `"Jane Q Public"` becomes `"Jane Q"`, a single token becomes `""`. The
/// split is on single spaces, so repeated spaces leave empty tokens behind:
/// `"Jane  Doe"` becomes `"Jane "`.
pub fn strip_last_token(name: &str) -> &str {
    name.rfind(' ').map_or("", |end| &name[..end])
}

impl Stage for DedupeNames {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, mut records: RecordSet) -> Result<StageOutput> {
        let mut seen = BTreeSet::new();
        let mut modified = 0;
        let mut nulled = 0;
        for (row, record) in records.iter_mut().enumerate() {
            let name = require_text(record, Self::NAME, &self.field, row)?;
            let replacement = if seen.insert(name.to_string()) {
                let stripped = strip_last_token(name);
                if stripped.len() == name.len() {
                    continue;
                }
                modified += 1;
                CellValue::Text(stripped.to_string())
            } else {
                nulled += 1;
                CellValue::Null
            };
            overwrite(record, Self::NAME, &self.field, replacement)?;
        }
        tracing::debug!(
            stage = Self::NAME,
            distinct = seen.len(),
            duplicates = nulled,
            "deduplicated names"
        );
        Ok(StageOutput {
            records,
            modified,
            nulled,
        })
    }
}
