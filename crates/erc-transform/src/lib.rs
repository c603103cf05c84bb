//! Record transformations for the eBay report converter.
//!
//! This crate provides the fixed sequence of record-set stages run between
//! loading and writing:
//!
//! - **truncate**: cut the item title to 23 characters (`modify_description`)
//! - **names**: strip last names, null repeated buyers (`modify_names`)
//! - **country**: keep United States shipments (`filter_country`)
//! - **pipeline**: runs the stages in order and reports per-stage counts
//!
//! Every stage takes the record set by value and hands it back, so the
//! pipeline driver is the only owner for the whole run.

mod error;
mod stage;

pub mod country;
pub mod names;
pub mod pipeline;
pub mod truncate;

// Error type
pub use error::{Result, TransformError};

// Stage contract
pub use stage::{Stage, StageOutput};

// Stages
pub use country::FilterCountry;
pub use names::{DedupeNames, strip_last_token};
pub use truncate::{DEFAULT_TITLE_LENGTH, TruncateField, truncate_chars};

// Pipeline
pub use pipeline::{
    PipelineOutput, PipelineReport, StageReport, TransformConfig, TransformPipeline,
};
