//! Fama-French industry classification of 4-digit SIC codes.
//!
//! Assigns each record a 5-, 12- or 38-group industry code, its short label
//! and a one-hot indicator vector, for use as categorical controls or fixed
//! effects. Works on JSON object records and on Arrow record batches.

pub mod annotate;
pub mod classify;
pub mod config;
pub mod error;
pub mod scheme;
pub mod sic;
pub mod utils;

// Re-export the most common types for easier use
pub use annotate::{AnnotationSummary, IndustryAnnotator, Record};
pub use classify::{
    Classification, IndustryCode, classify, description_of, indicator_columns, name_of,
};
pub use config::{AnnotatorConfig, FileConfig, LABEL_COLUMN, ReaderConfig};
pub use error::{IndustryError, Result};
pub use scheme::Scheme;

// Arrow types
pub use arrow::record_batch::RecordBatch;
