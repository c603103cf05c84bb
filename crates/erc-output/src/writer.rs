//! Remapped CSV writer.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use csv::{ErrorKind, QuoteStyle, Terminator, WriterBuilder};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use erc_model::{HeaderMapping, RecordSet};

use crate::error::{OutputError, Result};

/// Check that every mapped source column exists in the record set.
///
/// # Errors
///
/// Returns [`OutputError::EmptyMapping`] for a mapping without columns and
/// [`OutputError::UnknownSourceColumn`] for the first source column the
/// record set does not have.
pub fn validate_mapping(records: &RecordSet, mapping: &HeaderMapping) -> Result<()> {
    if mapping.is_empty() {
        return Err(OutputError::EmptyMapping);
    }
    for column in mapping.columns() {
        if !column.is_blank() && !records.has_column(&column.source) {
            return Err(OutputError::UnknownSourceColumn {
                column: column.source.clone(),
                title: column.title.clone(),
            });
        }
    }
    Ok(())
}

fn write_rows<W: Write>(
    sink: W,
    records: &RecordSet,
    mapping: &HeaderMapping,
) -> std::result::Result<W, csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record(mapping.titles())?;
    for record in records {
        writer.write_record(mapping.resolve(record))?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(io::Error::new(e.error().kind(), e.error().to_string())))
}

/// Serialize the record set to CSV bytes in memory.
///
/// The output is a pure function of `records` and `mapping`: identical inputs
/// give byte-identical output.
pub fn render_record_set(records: &RecordSet, mapping: &HeaderMapping) -> Result<Vec<u8>> {
    validate_mapping(records, mapping)?;
    write_rows(Vec::new(), records, mapping).map_err(|e| OutputError::Serialize {
        message: e.to_string(),
    })
}

fn write_error(path: &Path, error: csv::Error) -> OutputError {
    let message = error.to_string();
    match error.into_kind() {
        ErrorKind::Io(source) => OutputError::FileWrite {
            path: path.to_path_buf(),
            source,
        },
        _ => OutputError::Serialize { message },
    }
}

/// Temporary file beside `target` that ends up with the permissions `target`
/// would get from a plain write: those of the file it replaces, or the
/// default mode for a new file.
fn create_temp_file(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".erc-");
    // Same mode as `fs::write` before the umask; tempfile defaults to 0600.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let temp = builder.tempfile_in(dir)?;
    if let Ok(existing) = fs::metadata(target) {
        temp.as_file().set_permissions(existing.permissions())?;
    }
    Ok(temp)
}

/// Write the record set to `path`, replacing any existing file.
///
/// Rows go to a temporary file in the destination directory which is renamed
/// over `path` once complete. On error the destination is left untouched.
/// A replaced file keeps its permissions; a new one gets the default mode.
///
/// # Errors
///
/// - [`OutputError::DirectoryNotFound`] when the parent directory is missing.
///   The directory is never created.
/// - [`OutputError::FileWrite`] / [`OutputError::Persist`] on I/O failure.
/// - Mapping errors from [`validate_mapping`].
pub fn write_record_set(path: &Path, records: &RecordSet, mapping: &HeaderMapping) -> Result<()> {
    validate_mapping(records, mapping)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(OutputError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let temp = create_temp_file(dir, path).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(temp = %temp.path().display(), "writing temporary output");

    let temp = write_rows(temp, records, mapping).map_err(|e| write_error(path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|source| OutputError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    temp.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    info!(
        path = %path.display(),
        rows = records.len(),
        columns = mapping.len(),
        "wrote output"
    );
    Ok(())
}
