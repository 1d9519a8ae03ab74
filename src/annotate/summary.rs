//! Per-run classification counts

use arrow::array::{Array, Int64Array};
use arrow::record_batch::RecordBatch;

use super::IndustryAnnotator;
use crate::error::{IndustryError, Result};
use crate::scheme::Scheme;

/// Row counts for a set of annotated batches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub scheme: Scheme,
    pub rows: usize,
    /// Rows whose SIC was missing or not coercible
    pub missing: usize,
    /// Rows per industry code; index 0 is code 1
    pub counts: Vec<usize>,
}

impl AnnotationSummary {
    /// Rows that received an industry code
    #[must_use]
    pub const fn classified(&self) -> usize {
        self.rows - self.missing
    }

    /// Rows assigned to the scheme's catch-all code
    #[must_use]
    pub fn catch_all(&self) -> usize {
        let idx = usize::from(self.scheme.catch_all()) - 1;
        self.counts.get(idx).copied().unwrap_or(0)
    }
}

impl IndustryAnnotator {
    /// Count rows per industry code in batches produced by
    /// [`annotate_batch`](Self::annotate_batch).
    pub fn summarize(&self, annotated: &[RecordBatch]) -> Result<AnnotationSummary> {
        let code_column = &self.config.code_column;
        let mut summary = AnnotationSummary {
            scheme: self.scheme,
            rows: 0,
            missing: 0,
            counts: vec![0; self.indicator_columns.len()],
        };

        for batch in annotated {
            let column = batch
                .column_by_name(code_column)
                .ok_or_else(|| IndustryError::ColumnNotFound(code_column.clone()))?;
            let codes = column
                .as_any()
                .downcast_ref::<Int64Array>()
                .ok_or_else(|| IndustryError::UnsupportedColumnType {
                    column: code_column.clone(),
                    data_type: column.data_type().to_string(),
                })?;

            summary.rows += codes.len();
            summary.missing += codes.null_count();
            for code in codes.iter().flatten() {
                let slot = code
                    .checked_sub(1)
                    .and_then(|idx| usize::try_from(idx).ok())
                    .and_then(|idx| summary.counts.get_mut(idx))
                    .ok_or(IndustryError::CodeNotFound {
                        scheme: self.scheme,
                        code: u8::try_from(code).unwrap_or(u8::MAX),
                    })?;
                *slot += 1;
            }
        }
        Ok(summary)
    }
}
