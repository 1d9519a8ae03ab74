//! SIC value coercion
//!
//! SIC codes arrive loosely typed: integers, floats read from CSV or Parquet,
//! decimals, or text. Everything is coerced to `Option<i64>` before
//! classification. Coercion never fails; anything that is not an
//! integer-coercible number becomes `None` (missing).
//!
//! Numbers too large or too small for `i64` saturate to `i64::MAX` /
//! `i64::MIN`. They stay present and land on the catch-all code like any
//! other out-of-range value. Text is trimmed the same way on every path.

use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray, UInt64Array};
use arrow::compute::{CastOptions, cast_with_options};
use arrow::datatypes::DataType;

use serde_json::Value;

use crate::error::{IndustryError, Result};

/// Coerce a float by truncating toward zero.
///
/// NaN and infinities are missing; finite values beyond the `i64` range
/// saturate.
#[must_use]
pub fn from_f64(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    // `as` saturates at the i64 bounds
    #[allow(clippy::cast_possible_truncation)]
    let coerced = value.trunc() as i64;
    Some(coerced)
}

/// Coerce an unsigned integer, saturating at `i64::MAX`
#[must_use]
pub fn from_u64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Coerce text. Surrounding whitespace is ignored; integer text is parsed
/// directly, decimal text is parsed as a float and truncated.
#[must_use]
pub fn from_str(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<u64>().ok().map(from_u64))
        .or_else(|| trimmed.parse::<f64>().ok().and_then(from_f64))
}

/// Coerce a JSON value.
///
/// `null`, booleans, arrays and objects are missing.
#[must_use]
pub fn from_json(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(from_u64))
            .or_else(|| n.as_f64().and_then(from_f64)),
        Value::String(s) => from_str(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce an Arrow column to `Int64`.
///
/// Signed integer columns are cast directly and `UInt64` saturates. Float
/// and decimal columns go through `Float64` and truncate. String and
/// dictionary columns go through `Utf8` and are parsed with [`from_str`], so
/// `" 1311 "` and `"2834.0"` coerce exactly as they do in JSON records.
pub fn from_arrow(column: &str, array: &ArrayRef) -> Result<Int64Array> {
    let options = CastOptions {
        safe: true,
        ..Default::default()
    };
    let downcast_failed = || IndustryError::UnsupportedColumnType {
        column: column.to_string(),
        data_type: array.data_type().to_string(),
    };

    match array.data_type() {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::Null => {
            let as_int = cast_with_options(array, &DataType::Int64, &options)?;
            as_int
                .as_any()
                .downcast_ref::<Int64Array>()
                .cloned()
                .ok_or_else(downcast_failed)
        }
        DataType::UInt64 => {
            let values = array
                .as_any()
                .downcast_ref::<UInt64Array>()
                .ok_or_else(downcast_failed)?;
            Ok(values.iter().map(|v| v.map(from_u64)).collect())
        }
        DataType::Float16
        | DataType::Float32
        | DataType::Float64
        | DataType::Decimal128(_, _)
        | DataType::Decimal256(_, _) => {
            let as_float = cast_with_options(array, &DataType::Float64, &options)?;
            let values = as_float
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(downcast_failed)?;
            Ok(values.iter().map(|v| v.and_then(from_f64)).collect())
        }
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View | DataType::Dictionary(_, _) => {
            let as_text = cast_with_options(array, &DataType::Utf8, &options)?;
            let values = as_text
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(downcast_failed)?;
            Ok(values.iter().map(|v| v.and_then(from_str)).collect())
        }
        other => Err(IndustryError::UnsupportedColumnType {
            column: column.to_string(),
            data_type: other.to_string(),
        }),
    }
}
