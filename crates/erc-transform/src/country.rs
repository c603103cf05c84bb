//! Shipping country filter (`filter_country`).

use erc_model::RecordSet;
use erc_model::columns::{SHIP_TO_COUNTRY, UNITED_STATES};

use crate::error::Result;
use crate::stage::{Stage, StageOutput};

/// Keeps records whose country column equals a fixed value.
///
/// The comparison is exact and case-sensitive. Records without the column,
/// or with a null in it, are dropped rather than reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCountry {
    field: String,
    country: String,
}

impl FilterCountry {
    pub const NAME: &'static str = "filter_country";

    pub fn new(field: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            country: country.into(),
        }
    }

    pub fn keeps(&self, value: Option<&str>) -> bool {
        value == Some(self.country.as_str())
    }
}

impl Default for FilterCountry {
    fn default() -> Self {
        Self::new(SHIP_TO_COUNTRY, UNITED_STATES)
    }
}

impl Stage for FilterCountry {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, mut records: RecordSet) -> Result<StageOutput> {
        let before = records.len();
        records.retain(|record| self.keeps(record.text(&self.field)));
        tracing::debug!(
            stage = Self::NAME,
            country = %self.country,
            dropped = before - records.len(),
            "filtered records"
        );
        Ok(StageOutput::new(records))
    }
}
