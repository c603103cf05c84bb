//! Loads the source report into a [`RecordSet`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder};
use erc_model::{ModelError, RecordSet};

use crate::error::{IngestError, Result};

use super::header::normalize_header;

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open_file(path)?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header name)
    Ok(())
}

fn csv_error(path: &Path, error: csv::Error) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => IngestError::FieldCount {
            path: path.to_path_buf(),
            line: pos.as_ref().map_or(0, csv::Position::line),
            expected: expected_len,
            found: len,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

fn model_error(path: &Path, error: ModelError) -> IngestError {
    match error {
        ModelError::DuplicateColumn { column } => IngestError::DuplicateColumn {
            path: path.to_path_buf(),
            column,
        },
        source => IngestError::Model {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Reads a CSV report into a [`RecordSet`].
///
/// The first line is the header. Every following line becomes one record,
/// with cell values kept as raw text (no trimming, no type coercion) and rows
/// kept in file order.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] / [`IngestError::FileRead`] when the file
///   cannot be read.
/// - [`IngestError::EmptyCsv`] when there is no header line.
/// - [`IngestError::FieldCount`] when a row's field count differs from the
///   header's. Rows are never padded or truncated.
/// - [`IngestError::DuplicateColumn`] when the header repeats a name.
pub fn read_record_set(path: &Path) -> Result<RecordSet> {
    validate_encoding(path)?;
    let file = open_file(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut records = RecordSet::new(headers).map_err(|e| model_error(path, e))?;
    for row in reader.records() {
        let row = row.map_err(|e| csv_error(path, e))?;
        records
            .push_row(row.iter())
            .map_err(|e| model_error(path, e))?;
    }

    tracing::debug!(
        path = %path.display(),
        columns = records.columns().len(),
        rows = records.len(),
        "loaded report"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_record_set_keeps_row_order() {
        let file = create_temp_csv("A,B,C\n1,2,3\n4,5,6\n");
        let records = read_record_set(file.path()).unwrap();

        assert_eq!(records.columns(), ["A", "B", "C"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records.records()[0].text("A"), Some("1"));
        assert_eq!(records.records()[1].text("C"), Some("6"));
    }

    #[test]
    fn test_read_record_set_header_only() {
        let file = create_temp_csv("A,B\n");
        let records = read_record_set(file.path()).unwrap();

        assert_eq!(records.columns().len(), 2);
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_record_set_empty_file() {
        let file = create_temp_csv("");
        let result = read_record_set(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_record_set_with_bom() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n");
        let records = read_record_set(file.path()).unwrap();

        assert_eq!(records.columns(), ["A", "B"]);
        assert_eq!(records.records()[0].text("A"), Some("1"));
    }

    #[test]
    fn test_read_record_set_keeps_raw_values() {
        let file = create_temp_csv("A,B\n  padded  ,\"quoted, with comma\"\n");
        let records = read_record_set(file.path()).unwrap();

        let record = &records.records()[0];
        assert_eq!(record.text("A"), Some("  padded  "));
        assert_eq!(record.text("B"), Some("quoted, with comma"));
    }

    #[test]
    fn test_read_record_set_rejects_short_row() {
        let file = create_temp_csv("A,B,C\n1,2,3\n4,5\n");
        let result = read_record_set(file.path());

        match result {
            Err(IngestError::FieldCount {
                line,
                expected,
                found,
                ..
            }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected FieldCount error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_record_set_rejects_duplicate_header() {
        let file = create_temp_csv("A,A\n1,2\n");
        let result = read_record_set(file.path());

        assert!(matches!(
            result,
            Err(IngestError::DuplicateColumn { column, .. }) if column == "A"
        ));
    }

    #[test]
    fn test_read_record_set_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_record_set(&dir.path().join("missing.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'A', 0x00]).unwrap();

        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }
}
