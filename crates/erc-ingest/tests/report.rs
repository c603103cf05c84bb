use std::fs;
use std::path::PathBuf;

use erc_ingest::{IngestError, read_record_set};
use erc_model::CellValue;
use erc_model::columns::{BUYER_NAME, ITEM_TITLE, SHIP_TO_COUNTRY, SHIP_TO_PHONE};

const SALES_REPORT: &str = "\
Ship To Country,Ship To Phone,Buyer Name,Item Title
United States,555-1111,Jane Q Public,\"A very long item title that definitely exceeds 23 chars\"
Canada,555-2222,John Public,\"Short title\"
United States,555-3333,Jane Q Public,\"Another title here\"
";

fn write_report(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("input-file.csv");
    fs::write(&path, contents).expect("write report");
    path
}

#[test]
fn loads_sales_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(&dir, SALES_REPORT);

    let records = read_record_set(&path).expect("load report");

    assert_eq!(
        records.columns(),
        [SHIP_TO_COUNTRY, SHIP_TO_PHONE, BUYER_NAME, ITEM_TITLE]
    );
    assert_eq!(records.len(), 3);

    let phones: Vec<&str> = records
        .iter()
        .filter_map(|record| record.text(SHIP_TO_PHONE))
        .collect();
    assert_eq!(phones, vec!["555-1111", "555-2222", "555-3333"]);

    let first = &records.records()[0];
    assert_eq!(
        first.get(ITEM_TITLE),
        Some(&CellValue::from(
            "A very long item title that definitely exceeds 23 chars"
        ))
    );
}

#[test]
fn every_record_has_the_header_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(&dir, SALES_REPORT);

    let records = read_record_set(&path).unwrap();

    for record in &records {
        assert_eq!(record.len(), records.columns().len());
        for column in records.columns() {
            assert!(record.contains(column), "missing {column}");
        }
    }
}

#[test]
fn long_row_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(&dir, "A,B\n1,2\n3,4,5\n");

    let err = read_record_set(&path).unwrap_err();

    assert!(matches!(
        err,
        IngestError::FieldCount {
            expected: 2,
            found: 3,
            ..
        }
    ));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn multiline_quoted_cell_is_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(&dir, "A,B\n\"line one\nline two\",x\n");

    let records = read_record_set(&path).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records.records()[0].text("A"), Some("line one\nline two"));
}
