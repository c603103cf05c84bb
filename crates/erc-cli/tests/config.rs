//! Tests for run configuration files.

use std::fs;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use erc_cli::config::{DEFAULT_INPUT_FILE, RunConfig};
use erc_model::OutputColumn;

#[test]
fn loads_a_partial_config_file() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        r#"{
            "outputFile": "contacts.csv",
            "headerMapping": [
                {"id": "Ship To Phone", "title": "Phone"},
                {"title": "Notes"}
            ],
            "transform": {"titleLength": 10}
        }"#,
    )
    .unwrap();

    let config = RunConfig::load(file.path()).unwrap();

    assert_eq!(config.input_file, PathBuf::from(DEFAULT_INPUT_FILE));
    assert_eq!(config.output_file, PathBuf::from("contacts.csv"));
    assert_eq!(
        config.header_mapping.columns(),
        &[
            OutputColumn::new("Ship To Phone", "Phone"),
            OutputColumn::blank("Notes"),
        ]
    );
    assert_eq!(config.transform.title_length, 10);
    assert_eq!(config.transform.name_field, "Buyer Name");
}

#[test]
fn load_error_names_the_file() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "{ not json").unwrap();

    let err = RunConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn missing_file_is_an_error() {
    let err = RunConfig::load_or_default(Some(PathBuf::from("no/such/config.json").as_path()));
    assert!(err.is_err());
}

#[test]
fn no_file_means_defaults() {
    assert_eq!(RunConfig::load_or_default(None).unwrap(), RunConfig::default());
}

#[test]
fn misspelled_transform_key_is_an_error() {
    let err = RunConfig::from_json(r#"{"transform": {"titelLength": 5}}"#).unwrap_err();
    assert!(err.to_string().contains("titelLength"));
}
