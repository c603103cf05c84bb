use serde::{Deserialize, Serialize};

use crate::columns::{BUYER_NAME, ITEM_TITLE, SHIP_TO_PHONE};
use crate::record::{CellValue, Record};

/// One column of the output file.
///
/// An empty `source` means the column has no source and is always written
/// blank. Several output columns may read the same source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputColumn {
    /// Source column name, or empty for an always-blank column.
    #[serde(default, alias = "id")]
    pub source: String,
    /// Title written to the output header row.
    pub title: String,
}

impl OutputColumn {
    pub fn new(source: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
        }
    }

    /// A column with no source.
    pub fn blank(title: impl Into<String>) -> Self {
        Self::new("", title)
    }

    pub fn is_blank(&self) -> bool {
        self.source.is_empty()
    }

    /// Value this column takes for `record`.
    ///
    /// Blank columns, null cells and absent source columns all resolve to
    /// an empty string.
    pub fn resolve<'a>(&self, record: &'a Record) -> &'a str {
        if self.is_blank() {
            return "";
        }
        record.get(&self.source).map_or("", CellValue::as_output)
    }
}

/// Ordered output header applied when writing.
///
/// The mapping never touches the in-memory records; it is only consulted by
/// the writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderMapping {
    columns: Vec<OutputColumn>,
}

impl HeaderMapping {
    pub fn new(columns: Vec<OutputColumn>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[OutputColumn] {
        &self.columns
    }

    /// Output header titles in order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.title.as_str())
    }

    /// Non-empty source columns in order. Repeats are kept.
    pub fn source_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|column| !column.is_blank())
            .map(|column| column.source.as_str())
    }

    /// Output row for `record`, one value per output column.
    pub fn resolve<'a>(&self, record: &'a Record) -> Vec<&'a str> {
        self.columns
            .iter()
            .map(|column| column.resolve(record))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for HeaderMapping {
    /// Contact sheet header used for the eBay report.
    fn default() -> Self {
        Self::new(vec![
            OutputColumn::new(SHIP_TO_PHONE, "Phone"),
            OutputColumn::new(BUYER_NAME, "First Name"),
            OutputColumn::blank("Last Name"),
            OutputColumn::blank("Email"),
            OutputColumn::new(ITEM_TITLE, "Address"),
            OutputColumn::blank("City"),
            OutputColumn::blank("State"),
            OutputColumn::blank("Zip"),
            OutputColumn::blank("Company Name"),
            OutputColumn::blank("Tags"),
        ])
    }
}
