use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use ff_industry::{RecordBatch, Scheme, classify};

/// Classify a present SIC value and return the raw code
#[must_use]
pub fn code_of(sic: i64, scheme: Scheme) -> u8 {
    classify(Some(sic), scheme)
        .expect("present SIC values are always classified")
        .get()
}

/// Build a two-column batch (`gvkey`, `sic`) around an arbitrary SIC array
#[must_use]
pub fn firm_batch(sic: ArrayRef) -> RecordBatch {
    let n = sic.len();
    let schema = Arc::new(Schema::new(vec![
        Field::new("gvkey", DataType::Utf8, false),
        Field::new("sic", sic.data_type().clone(), true),
    ]));
    let ids: Vec<String> = (0..n).map(|i| format!("{:06}", i + 1)).collect();
    RecordBatch::try_new(schema, vec![Arc::new(StringArray::from(ids)), sic])
        .expect("valid test batch")
}

/// Fetch an `Int64` output column by name
#[must_use]
pub fn int_column<'a>(batch: &'a RecordBatch, name: &str) -> &'a Int64Array {
    batch
        .column_by_name(name)
        .unwrap_or_else(|| panic!("column {name} missing"))
        .as_any()
        .downcast_ref::<Int64Array>()
        .unwrap_or_else(|| panic!("column {name} is not Int64"))
}

/// Fetch a `Utf8` output column by name
#[must_use]
pub fn str_column<'a>(batch: &'a RecordBatch, name: &str) -> &'a StringArray {
    batch
        .column_by_name(name)
        .unwrap_or_else(|| panic!("column {name} missing"))
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap_or_else(|| panic!("column {name} is not Utf8"))
}
