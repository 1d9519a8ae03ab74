//! Arrow record batch annotation

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Int64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::IndustryAnnotator;
use crate::classify::Classification;
use crate::config::LABEL_COLUMN;
use crate::error::{IndustryError, Result};
use crate::sic;

impl IndustryAnnotator {
    /// Output column names in the order they are appended
    fn output_columns(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.indicator_columns.len() + 2);
        names.push(self.config.code_column.as_str());
        names.push(LABEL_COLUMN);
        names.extend(self.indicator_columns.iter().map(String::as_str));
        names
    }

    /// Annotate one record batch.
    ///
    /// The SIC column may be any integer, float, decimal or string type.
    /// All original columns are kept in order; if an original column shares
    /// a name with an output column it is dropped and replaced.
    pub fn annotate_batch(&self, batch: &RecordBatch) -> Result<RecordBatch> {
        let sic_column = &self.config.sic_column;
        let schema = batch.schema();
        let sic_idx = schema
            .index_of(sic_column)
            .map_err(|_| IndustryError::ColumnNotFound(sic_column.clone()))?;
        let sics = sic::from_arrow(sic_column, batch.column(sic_idx))?;

        let n_rows = batch.num_rows();
        let n_groups = self.indicator_columns.len();
        let mut code_builder = Int64Builder::with_capacity(n_rows);
        let mut label_builder = StringBuilder::with_capacity(n_rows, n_rows * 5);
        let mut flags: Vec<Vec<i64>> = vec![Vec::with_capacity(n_rows); n_groups];

        for row in 0..n_rows {
            let value = (!sics.is_null(row)).then(|| sics.value(row));
            let result = Classification::of(value, self.scheme);

            code_builder.append_option(result.code.map(i64::from));
            label_builder.append_option(result.label);
            for (idx, column) in flags.iter_mut().enumerate() {
                column.push(i64::from(result.code.is_some_and(|c| c.index() == idx)));
            }
        }

        let outputs = self.output_columns();
        let replaced: FxHashSet<&str> = outputs.iter().copied().collect();

        let mut fields = Vec::with_capacity(schema.fields().len() + outputs.len());
        let mut columns: Vec<ArrayRef> = Vec::with_capacity(fields.capacity());
        for (field, column) in schema.fields().iter().zip(batch.columns()) {
            if replaced.contains(field.name().as_str()) {
                log::warn!("Replacing existing column '{}'", field.name());
                continue;
            }
            fields.push(Arc::clone(field));
            columns.push(Arc::clone(column));
        }

        fields.push(Arc::new(Field::new(
            self.config.code_column.as_str(),
            DataType::Int64,
            true,
        )));
        columns.push(Arc::new(code_builder.finish()));

        fields.push(Arc::new(Field::new(LABEL_COLUMN, DataType::Utf8, true)));
        columns.push(Arc::new(label_builder.finish()));

        for (name, values) in self.indicator_columns.iter().zip(flags) {
            fields.push(Arc::new(Field::new(name.as_str(), DataType::Int64, false)));
            columns.push(Arc::new(arrow::array::Int64Array::from(values)));
        }

        let out_schema = Arc::new(Schema::new_with_metadata(
            fields,
            schema.metadata().clone(),
        ));
        log::debug!(
            "Annotated batch of {n_rows} rows with {} ({} columns)",
            self.scheme,
            out_schema.fields().len()
        );
        Ok(RecordBatch::try_new(out_schema, columns)?)
    }

    /// Annotate several record batches, preserving their order.
    ///
    /// Batches are processed in parallel when `config.parallel` is set.
    pub fn annotate_batches(&self, batches: &[RecordBatch]) -> Result<Vec<RecordBatch>> {
        self.annotate_batches_with_progress(batches, &ProgressBar::hidden())
    }

    /// Like [`annotate_batches`](Self::annotate_batches), advancing `pb` once
    /// per finished batch.
    pub fn annotate_batches_with_progress(
        &self,
        batches: &[RecordBatch],
        pb: &ProgressBar,
    ) -> Result<Vec<RecordBatch>> {
        if self.config.parallel {
            batches
                .par_iter()
                .progress_with(pb.clone())
                .map(|batch| self.annotate_batch(batch))
                .collect()
        } else {
            batches
                .iter()
                .progress_with(pb.clone())
                .map(|batch| self.annotate_batch(batch))
                .collect()
        }
    }
}
