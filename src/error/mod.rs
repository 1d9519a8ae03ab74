//! Error handling for industry classification.

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

use crate::scheme::Scheme;

/// Errors that can occur while building annotators or annotating data
#[derive(Debug, thiserror::Error)]
pub enum IndustryError {
    /// A group count other than 5, 12 or 38 was requested
    #[error("Unsupported industry scheme: {0} groups (expected 5, 12 or 38)")]
    UnsupportedScheme(String),

    /// A rule or name table failed its construction-time self-check
    #[error("Invalid rule table for {scheme}: {reason}")]
    InvalidRuleTable {
        /// Scheme whose table is defective
        scheme: Scheme,
        /// What the self-check found
        reason: String,
    },

    /// Industry code outside `1..=N` for the scheme
    #[error("Industry code {code} not found in {scheme}")]
    CodeNotFound {
        /// Scheme that was queried
        scheme: Scheme,
        /// Offending code
        code: u8,
    },

    /// The configured SIC column is not present in the input
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// The SIC column has a type that cannot be cast to an integer
    #[error("Column '{column}' has unsupported type {data_type}")]
    UnsupportedColumnType {
        /// Column name
        column: String,
        /// Arrow type description
        data_type: String,
    },

    /// Two output columns would share a name
    #[error("Output column '{0}' is produced twice; change the code column or indicator prefix")]
    ColumnNameCollision(String),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (config) error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for industry classification operations
pub type Result<T> = std::result::Result<T, IndustryError>;
