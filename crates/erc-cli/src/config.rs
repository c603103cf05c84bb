//! Run configuration.
//!
//! A run is described by a [`RunConfig`]: where to read the report, where to
//! write the contact sheet, the header mapping, and the keys used by the
//! stages. Every field has a default, so a config file only needs the keys
//! it changes and no config file at all gives the stock conversion.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use erc_model::HeaderMapping;
use erc_transform::TransformConfig;

/// Default location of the source report.
pub const DEFAULT_INPUT_FILE: &str = "./input/input-file.csv";

/// Default location of the contact sheet.
pub const DEFAULT_OUTPUT_FILE: &str = "./output/eBay-Report.csv";

/// Everything needed to run one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RunConfig {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub header_mapping: HeaderMapping,
    pub transform: TransformConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            header_mapping: HeaderMapping::default(),
            transform: TransformConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not a valid config document.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        debug!(
            path = %path.display(),
            columns = config.header_mapping.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse a config document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load `path` when given, otherwise start from the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line path overrides.
    #[must_use]
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input_file = input;
        }
        if let Some(output) = output {
            self.output_file = output;
        }
        self
    }
}
