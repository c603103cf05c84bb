use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ModelError, Result};

/// A single cell value.
///
/// Cells read from the source report are always [`CellValue::Text`].
/// [`CellValue::Null`] only appears when a stage clears a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellValue {
    Text(String),
    Null,
}

impl CellValue {
    /// Returns the text, or `None` for a null cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Null => None,
        }
    }

    /// Text written to the output file. Null cells become empty fields.
    pub fn as_output(&self) -> &str {
        self.as_text().unwrap_or("")
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One row of the report, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    cells: BTreeMap<String, CellValue>,
}

impl Record {
    /// Build a record from `(column, value)` pairs. Later pairs win on
    /// duplicate columns.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CellValue>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Look up a cell. Absent columns return `None`.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Look up a text cell. Absent columns and null cells both return `None`.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(CellValue::as_text)
    }

    /// Overwrite an existing cell and return the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownColumn`] when the record has no such
    /// column. Records never gain columns after loading.
    pub fn set(&mut self, column: &str, value: impl Into<CellValue>) -> Result<CellValue> {
        let cell = self
            .cells
            .get_mut(column)
            .ok_or_else(|| ModelError::UnknownColumn {
                column: column.to_string(),
            })?;
        Ok(std::mem::replace(cell, value.into()))
    }

    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Ordered collection of records sharing one header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Create an empty record set for the given header.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateColumn`] if a column name repeats.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        Ok(Self {
            columns,
            records: Vec::new(),
        })
    }

    /// Header columns in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    /// Append a record whose key set matches the header exactly.
    pub fn push(&mut self, record: Record) -> Result<()> {
        if record.len() != self.columns.len() {
            return Err(ModelError::ColumnMismatch {
                expected: self.columns.len(),
                found: record.len(),
            });
        }
        if let Some(column) = record.columns().find(|column| !self.has_column(column)) {
            return Err(ModelError::UnknownColumn {
                column: column.to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Append a row of raw values, positionally matched to the header.
    pub fn push_row<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let values: Vec<CellValue> = values.into_iter().map(Into::into).collect();
        if values.len() != self.columns.len() {
            return Err(ModelError::ColumnMismatch {
                expected: self.columns.len(),
                found: values.len(),
            });
        }
        let record = Record::from_pairs(self.columns.iter().cloned().zip(values));
        self.records.push(record);
        Ok(())
    }

    /// Keep only records matching `keep`, preserving their order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Record) -> bool,
    {
        self.records.retain(keep);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Record> {
        self.records.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
