//! Record annotation
//!
//! Applies one scheme's classifier and name table to a batch of records and
//! appends the industry code, the `FF_IND` label and N one-hot indicator
//! fields. Input records are never modified; annotated copies are returned.
//!
//! Malformed SIC values (non-numeric text, booleans, NaN) are treated as
//! missing, not as errors. A bad value in one record never affects another.

mod batch;
mod summary;

pub use summary::AnnotationSummary;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde_json::{Map, Value};

use crate::classify::{Classification, indicator_columns};
use crate::config::{AnnotatorConfig, LABEL_COLUMN};
use crate::error::{IndustryError, Result};
use crate::scheme::Scheme;
use crate::sic;

/// A JSON object record
pub type Record = Map<String, Value>;

/// Annotator bound to one verified scheme
#[derive(Debug, Clone)]
pub struct IndustryAnnotator {
    scheme: Scheme,
    config: AnnotatorConfig,
    indicator_columns: Vec<String>,
}

impl IndustryAnnotator {
    /// Build an annotator for a group count of 5, 12 or 38.
    ///
    /// Fails with `UnsupportedScheme` for any other count, and with
    /// `InvalidRuleTable` if the scheme's tables fail their self-check.
    pub fn new(groups: u8, config: AnnotatorConfig) -> Result<Self> {
        Self::for_scheme(Scheme::try_from(groups)?, config)
    }

    /// Build an annotator for a known scheme.
    ///
    /// Fails with `ColumnNameCollision` when the code column, the label
    /// column and the indicator columns do not all have distinct names,
    /// e.g. code column `i1` with prefix `i`.
    pub fn for_scheme(scheme: Scheme, config: AnnotatorConfig) -> Result<Self> {
        scheme.verify()?;

        let shadowed = scheme.rules().shadowed_spans();
        for (code, span) in &shadowed {
            log::debug!("{scheme}: span {span} of rule {code} is claimed by an earlier rule");
        }

        let indicator_columns = indicator_columns(&config.indicator_prefix, scheme);
        let mut seen = FxHashSet::default();
        let outputs = [config.code_column.as_str(), LABEL_COLUMN]
            .into_iter()
            .chain(indicator_columns.iter().map(String::as_str));
        for name in outputs {
            if !seen.insert(name) {
                return Err(IndustryError::ColumnNameCollision(name.to_string()));
            }
        }

        Ok(Self {
            scheme,
            config,
            indicator_columns,
        })
    }

    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    #[must_use]
    pub const fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Names of the N indicator columns, in code order
    #[must_use]
    pub fn indicator_columns(&self) -> &[String] {
        &self.indicator_columns
    }

    /// Classify a single record's SIC value
    #[must_use]
    pub fn classify_record(&self, record: &Record) -> Classification {
        let sic = record.get(&self.config.sic_column).and_then(sic::from_json);
        Classification::of(sic, self.scheme)
    }

    /// Return a copy of `record` with the industry fields added.
    ///
    /// An absent SIC field counts as missing. Output fields overwrite any
    /// existing fields of the same name.
    #[must_use]
    pub fn annotate_record(&self, record: &Record) -> Record {
        let result = self.classify_record(record);
        let mut out = record.clone();

        out.insert(
            self.config.code_column.clone(),
            result
                .code
                .map_or(Value::Null, |code| Value::from(code.get())),
        );
        out.insert(
            LABEL_COLUMN.to_string(),
            result.label.map_or(Value::Null, Value::from),
        );
        for (column, flag) in self.indicator_columns.iter().zip(result.indicators()) {
            out.insert(column.clone(), Value::from(flag));
        }
        out
    }

    /// Annotate a batch of records, preserving order
    #[must_use]
    pub fn annotate_records(&self, records: &[Record]) -> Vec<Record> {
        if self.config.parallel {
            records
                .par_iter()
                .map(|record| self.annotate_record(record))
                .collect()
        } else {
            records
                .iter()
                .map(|record| self.annotate_record(record))
                .collect()
        }
    }
}
