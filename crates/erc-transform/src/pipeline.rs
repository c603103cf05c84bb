//! The fixed transformation pipeline.
//!
//! Stages run in a fixed order, each over the complete output of the previous
//! one:
//!
//! 1. **`modify_description`**: truncate the item title
//! 2. **`modify_names`**: strip last names and null repeated buyers
//! 3. **`filter_country`**: keep United States shipments only
//!
//! The first failing stage aborts the run; nothing is rolled back because the
//! caller only ever sees the final record set.
//!
//! # Example
//!
//! ```ignore
//! use erc_transform::{TransformConfig, TransformPipeline};
//!
//! let pipeline = TransformPipeline::standard(&TransformConfig::default());
//! let output = pipeline.execute(records)?;
//! println!("{} records kept", output.records.len());
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use erc_model::RecordSet;
use erc_model::columns::{BUYER_NAME, ITEM_TITLE};

use crate::country::FilterCountry;
use crate::error::Result;
use crate::names::DedupeNames;
use crate::stage::Stage;
use crate::truncate::{DEFAULT_TITLE_LENGTH, TruncateField};

/// Column keys and limits used by the standard stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TransformConfig {
    /// Column truncated by `modify_description`.
    pub title_field: String,
    /// Characters kept by `modify_description`.
    pub title_length: usize,
    /// Column deduplicated by `modify_names`.
    pub name_field: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            title_field: ITEM_TITLE.to_string(),
            title_length: DEFAULT_TITLE_LENGTH,
            name_field: BUYER_NAME.to_string(),
        }
    }
}

/// Counts recorded for one stage run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub name: &'static str,
    pub records_in: usize,
    pub records_out: usize,
    pub modified: usize,
    pub nulled: usize,
}

impl StageReport {
    pub fn dropped(&self) -> usize {
        self.records_in.saturating_sub(self.records_out)
    }
}

/// Per-stage counts for a complete pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub stages: Vec<StageReport>,
}

impl PipelineReport {
    /// Records handed to the first stage.
    pub fn records_in(&self) -> usize {
        self.stages.first().map_or(0, |stage| stage.records_in)
    }

    /// Records left after the last stage.
    pub fn records_out(&self) -> usize {
        self.stages.last().map_or(0, |stage| stage.records_out)
    }

    pub fn stage(&self, name: &str) -> Option<&StageReport> {
        self.stages.iter().find(|stage| stage.name == name)
    }
}

/// Final record set and the report describing how it was produced.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub records: RecordSet,
    pub report: PipelineReport,
}

/// Ordered list of stages applied to a record set.
pub struct TransformPipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl TransformPipeline {
    /// The standard truncate → dedupe → filter sequence.
    pub fn standard(config: &TransformConfig) -> Self {
        Self {
            stages: vec![
                Box::new(TruncateField::new(
                    config.title_field.clone(),
                    config.title_length,
                )),
                Box::new(DedupeNames::new(config.name_field.clone())),
                Box::new(FilterCountry::default()),
            ],
        }
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage in order.
    ///
    /// # Errors
    ///
    /// Returns the first stage error; later stages do not run.
    pub fn execute(&self, records: RecordSet) -> Result<PipelineOutput> {
        let mut records = records;
        let mut report = PipelineReport::default();

        for stage in &self.stages {
            let name = stage.name();
            let span = info_span!("stage", stage = name);
            let _guard = span.enter();
            let start = Instant::now();
            let records_in = records.len();

            info!(records = records_in, "stage started");
            let output = stage.apply(records)?;
            let stage_report = StageReport {
                name,
                records_in,
                records_out: output.records.len(),
                modified: output.modified,
                nulled: output.nulled,
            };
            info!(
                records_out = stage_report.records_out,
                modified = stage_report.modified,
                nulled = stage_report.nulled,
                duration_ms = start.elapsed().as_millis(),
                "stage complete"
            );

            records = output.records;
            report.stages.push(stage_report);
        }

        Ok(PipelineOutput { records, report })
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::standard(&TransformConfig::default())
    }
}

impl std::fmt::Debug for TransformPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformPipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}
