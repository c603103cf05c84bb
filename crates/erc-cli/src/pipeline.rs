//! Pipeline driver: load, transform, write.
//!
//! Each phase is a plain function so tests can drive them separately. The
//! record set is owned here for the whole run and moved from phase to phase.

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, info_span, trace};

use erc_ingest::{IngestError, read_record_set};
use erc_model::{CellValue, HeaderMapping, RecordSet};
use erc_output::{OutputError, validate_mapping, write_record_set};
use erc_transform::{PipelineOutput, PipelineReport, TransformError, TransformPipeline};

use crate::config::RunConfig;
use crate::logging::redact_value;

/// A failed run, tagged with the phase that failed.
///
/// Rendered with `{:#}` this reads `<stage>: <detail>`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("load")]
    Load(#[source] IngestError),

    /// Transform errors already carry their stage name.
    #[error(transparent)]
    Transform(TransformError),

    #[error("write")]
    Write(#[source] OutputError),
}

impl PipelineError {
    /// Name of the failing stage.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::Transform(error) => error.stage(),
            Self::Write(_) => "write",
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub input_file: PathBuf,
    /// `None` for a dry run.
    pub output_file: Option<PathBuf>,
    pub report: PipelineReport,
    pub records_written: usize,
}

/// Read the source report.
pub fn load(path: &Path) -> Result<RecordSet, PipelineError> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let records = read_record_set(path).map_err(PipelineError::Load)?;
    info!(
        records = records.len(),
        columns = records.columns().len(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(records)
}

/// Run the fixed stage sequence.
pub fn transform(
    pipeline: &TransformPipeline,
    records: RecordSet,
) -> Result<PipelineOutput, PipelineError> {
    let output = pipeline.execute(records).map_err(PipelineError::Transform)?;
    if tracing::enabled!(tracing::Level::TRACE) {
        for (row, record) in output.records.iter().enumerate() {
            for column in record.columns() {
                let value = record.get(column).map_or("", CellValue::as_output);
                trace!(row, column, value = redact_value(value), "kept cell");
            }
        }
    }
    Ok(output)
}

/// Write the contact sheet.
pub fn write(
    path: &Path,
    records: &RecordSet,
    mapping: &HeaderMapping,
) -> Result<(), PipelineError> {
    let span = info_span!("write", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    write_record_set(path, records, mapping).map_err(PipelineError::Write)?;
    debug!(duration_ms = start.elapsed().as_millis(), "write complete");
    Ok(())
}

/// Run a complete conversion.
///
/// With `dry_run` the mapping is still checked against the transformed
/// records but nothing is written.
///
/// # Errors
///
/// Returns the first failure. When the run fails the output file, if any,
/// is left as it was.
pub fn run(config: &RunConfig, dry_run: bool) -> Result<RunResult, PipelineError> {
    let records = load(&config.input_file)?;
    let pipeline = TransformPipeline::standard(&config.transform);
    let PipelineOutput { records, report } = transform(&pipeline, records)?;

    let output_file = if dry_run {
        validate_mapping(&records, &config.header_mapping).map_err(PipelineError::Write)?;
        info!(records = records.len(), "dry run, skipping write");
        None
    } else {
        write(&config.output_file, &records, &config.header_mapping)?;
        Some(config.output_file.clone())
    };

    Ok(RunResult {
        input_file: config.input_file.clone(),
        output_file,
        report,
        records_written: records.len(),
    })
}
