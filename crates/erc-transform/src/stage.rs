//! The [`Stage`] trait and helpers shared by the stage implementations.

use erc_model::{CellValue, Record, RecordSet};

use crate::error::{Result, TransformError};

/// Record set produced by a stage, with the counts reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub records: RecordSet,
    /// Cells rewritten with a new text value.
    pub modified: usize,
    /// Cells cleared to null.
    pub nulled: usize,
}

impl StageOutput {
    pub fn new(records: RecordSet) -> Self {
        Self {
            records,
            modified: 0,
            nulled: 0,
        }
    }
}

/// One step of the transformation pipeline.
///
/// A stage consumes the whole record set and returns the whole record set.
/// It may rewrite cells in place or drop records, but never adds columns
/// and never reorders the records it keeps.
pub trait Stage {
    /// Stable name used in logs, reports and errors.
    fn name(&self) -> &'static str;

    /// Apply the stage to every record.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformError`] naming this stage. The pipeline stops on
    /// the first error.
    fn apply(&self, records: RecordSet) -> Result<StageOutput>;
}

/// Text value of `field`, failing when the column is absent or null.
pub(crate) fn require_text<'a>(
    record: &'a Record,
    stage: &'static str,
    field: &str,
    row: usize,
) -> Result<&'a str> {
    match record.get(field) {
        Some(CellValue::Text(value)) => Ok(value),
        Some(CellValue::Null) => Err(TransformError::NotText {
            stage,
            field: field.to_string(),
            row,
        }),
        None => Err(TransformError::FieldMissing {
            stage,
            field: field.to_string(),
            row,
        }),
    }
}

/// Overwrite `field`, attributing any failure to `stage`.
pub(crate) fn overwrite(
    record: &mut Record,
    stage: &'static str,
    field: &str,
    value: CellValue,
) -> Result<()> {
    record
        .set(field, value)
        .map(drop)
        .map_err(|source| TransformError::Model { stage, source })
}
