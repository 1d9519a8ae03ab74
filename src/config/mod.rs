//! Configuration for annotation and Parquet reading.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Default name of the input SIC column
pub const DEFAULT_SIC_COLUMN: &str = "sic";
/// Default name of the output industry code column
pub const DEFAULT_CODE_COLUMN: &str = "FF_IND_CODE";
/// Name of the output industry label column (not configurable)
pub const LABEL_COLUMN: &str = "FF_IND";
/// Default prefix for indicator columns
pub const DEFAULT_INDICATOR_PREFIX: &str = "i";
/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;
/// Environment variable overriding the reader batch size
pub const BATCH_SIZE_ENV: &str = "FF_INDUSTRY_BATCH_SIZE";

/// Configuration for the record annotator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Column holding the SIC value
    pub sic_column: String,
    /// Column receiving the industry code
    pub code_column: String,
    /// Prefix for the N indicator columns
    pub indicator_prefix: String,
    /// Annotate multiple batches in parallel
    pub parallel: bool,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            sic_column: DEFAULT_SIC_COLUMN.to_string(),
            code_column: DEFAULT_CODE_COLUMN.to_string(),
            indicator_prefix: DEFAULT_INDICATOR_PREFIX.to_string(),
            parallel: true,
        }
    }
}

/// Configuration for reading Parquet input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Rows per record batch
    pub batch_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            batch_size: get_batch_size().unwrap_or(DEFAULT_BATCH_SIZE),
        }
    }
}

/// Helper function to get batch size from environment
#[must_use]
pub fn get_batch_size() -> Option<usize> {
    std::env::var(BATCH_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
}

/// Top-level config file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Group count: 5, 12 or 38
    pub scheme: Option<crate::scheme::Scheme>,
    pub annotator: AnnotatorConfig,
    pub reader: ReaderConfig,
}

impl FileConfig {
    /// Load a JSON config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
