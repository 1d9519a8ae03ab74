#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::utils::{firm_batch, int_column, str_column};
    use arrow::array::{
        Array, ArrayRef, Decimal128Array, Int32Array, StringArray, StringDictionaryBuilder,
        UInt64Array,
    };
    use arrow::datatypes::Int32Type;
    use ff_industry::{AnnotatorConfig, IndustryAnnotator, IndustryError, Record, RecordBatch};
    use serde_json::json;

    #[test]
    fn test_string_sic_column() {
        let annotator = IndustryAnnotator::new(12, AnnotatorConfig::default()).unwrap();
        let sic: ArrayRef = Arc::new(StringArray::from(vec![
            Some("3571"),
            Some("6021.0"),
            Some("unknown"),
            None,
        ]));
        let out = annotator.annotate_batch(&firm_batch(sic)).unwrap();

        let codes = int_column(&out, "FF_IND_CODE");
        assert_eq!(codes.value(0), 6);
        assert_eq!(codes.value(1), 11);
        assert!(codes.is_null(2));
        assert!(codes.is_null(3));

        let labels = str_column(&out, "FF_IND");
        assert_eq!(labels.value(0), "BusEq");
        assert_eq!(labels.value(1), "Money");
        assert!(labels.is_null(2));
    }

    #[test]
    fn test_padded_string_sic_column() {
        let annotator = IndustryAnnotator::new(12, AnnotatorConfig::default()).unwrap();
        let padded = [" 1311 ", "1311 ", " 2834.0", "   "];
        let sic: ArrayRef = Arc::new(StringArray::from(padded.to_vec()));
        let out = annotator.annotate_batch(&firm_batch(sic)).unwrap();

        let codes = int_column(&out, "FF_IND_CODE");
        assert_eq!(codes.value(0), 4);
        assert_eq!(codes.value(1), 4);
        assert_eq!(codes.value(2), 10);
        assert!(codes.is_null(3));

        // Same values through the record path
        for (row, value) in padded.iter().enumerate() {
            let mut record = Record::new();
            record.insert("sic".to_string(), json!(value));
            let expected = annotator.annotate_record(&record)["FF_IND_CODE"].clone();
            let actual = (!codes.is_null(row)).then(|| json!(codes.value(row)));
            assert_eq!(actual.unwrap_or(serde_json::Value::Null), expected, "{value:?}");
        }
    }

    #[test]
    fn test_padded_dictionary_sic_column() {
        let annotator = IndustryAnnotator::new(5, AnnotatorConfig::default()).unwrap();
        let mut builder = StringDictionaryBuilder::<Int32Type>::new();
        builder.append_value(" 3571");
        builder.append_value("3571 ");
        builder.append_null();
        let sic: ArrayRef = Arc::new(builder.finish());
        let out = annotator.annotate_batch(&firm_batch(sic)).unwrap();

        let codes = int_column(&out, "FF_IND_CODE");
        assert_eq!(codes.value(0), 3);
        assert_eq!(codes.value(1), 3);
        assert!(codes.is_null(2));
    }

    #[test]
    fn test_unsigned_sic_column_saturates() {
        let annotator = IndustryAnnotator::new(12, AnnotatorConfig::default()).unwrap();
        let sic: ArrayRef = Arc::new(UInt64Array::from(vec![Some(u64::MAX), Some(1311), None]));
        let out = annotator.annotate_batch(&firm_batch(sic)).unwrap();

        let codes = int_column(&out, "FF_IND_CODE");
        assert_eq!(codes.value(0), 12);
        assert_eq!(codes.value(1), 4);
        assert!(codes.is_null(2));
        assert_eq!(str_column(&out, "FF_IND").value(0), "Other");
        assert_eq!(int_column(&out, "i12").value(0), 1);
    }

    #[test]
    fn test_decimal_sic_column() {
        let annotator = IndustryAnnotator::new(38, AnnotatorConfig::default()).unwrap();
        let sic: ArrayRef = Arc::new(
            Decimal128Array::from(vec![Some(90_000), Some(679_750), None])
                .with_precision_and_scale(10, 2)
                .unwrap(),
        );
        let out = annotator.annotate_batch(&firm_batch(sic)).unwrap();

        let codes = int_column(&out, "FF_IND_CODE");
        assert_eq!(codes.value(0), 1);
        assert_eq!(codes.value(1), 35);
        assert!(codes.is_null(2));
    }

    #[test]
    fn test_one_hot_columns() {
        let annotator = IndustryAnnotator::new(5, AnnotatorConfig::default()).unwrap();
        let sic: ArrayRef = Arc::new(Int32Array::from(vec![Some(100), Some(1311), None, Some(8001)]));
        let out = annotator.annotate_batch(&firm_batch(sic)).unwrap();
        let codes = int_column(&out, "FF_IND_CODE");

        for row in 0..out.num_rows() {
            let flags: Vec<i64> = (1..=5)
                .map(|i| int_column(&out, &format!("i{i}")).value(row))
                .collect();
            if codes.is_null(row) {
                assert_eq!(flags, vec![0; 5]);
            } else {
                let code = usize::try_from(codes.value(row)).unwrap();
                assert_eq!(flags.iter().sum::<i64>(), 1);
                assert_eq!(flags[code - 1], 1);
            }
        }
    }

    #[test]
    fn test_custom_output_names() {
        let config = AnnotatorConfig {
            code_column: "ff12".to_string(),
            indicator_prefix: "ind_".to_string(),
            ..AnnotatorConfig::default()
        };
        let annotator = IndustryAnnotator::new(12, config).unwrap();
        let sic: ArrayRef = Arc::new(Int32Array::from(vec![Some(4813)]));
        let out = annotator.annotate_batch(&firm_batch(sic)).unwrap();

        assert_eq!(int_column(&out, "ff12").value(0), 7);
        assert_eq!(int_column(&out, "ind_7").value(0), 1);
        assert!(out.column_by_name("FF_IND_CODE").is_none());
        assert_eq!(str_column(&out, "FF_IND").value(0), "Telcm");
    }

    #[test]
    fn test_empty_batch_gets_output_schema() {
        let annotator = IndustryAnnotator::new(38, AnnotatorConfig::default()).unwrap();
        let sic: ArrayRef = Arc::new(Int32Array::from(Vec::<Option<i32>>::new()));
        let out = annotator.annotate_batch(&firm_batch(sic)).unwrap();
        assert_eq!(out.num_rows(), 0);
        assert_eq!(out.num_columns(), 2 + 2 + 38);
        assert_eq!(out.schema().field(41).name(), "i38");
    }

    #[test]
    fn test_unsupported_column_type() {
        let annotator = IndustryAnnotator::new(12, AnnotatorConfig::default()).unwrap();
        let sic: ArrayRef = Arc::new(arrow::array::BooleanArray::from(vec![true, false]));
        let err = annotator.annotate_batch(&firm_batch(sic)).unwrap_err();
        assert!(matches!(err, IndustryError::UnsupportedColumnType { .. }));
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let sequential = IndustryAnnotator::new(
            12,
            AnnotatorConfig {
                parallel: false,
                ..AnnotatorConfig::default()
            },
        )
        .unwrap();
        let parallel = IndustryAnnotator::new(12, AnnotatorConfig::default()).unwrap();

        let batches: Vec<RecordBatch> = (0..8)
            .map(|chunk| {
                let values: Vec<Option<i32>> = (0..1250).map(|i| Some(chunk * 1250 + i)).collect();
                firm_batch(Arc::new(Int32Array::from(values)))
            })
            .collect();

        let a = sequential.annotate_batches(&batches).unwrap();
        let b = parallel.annotate_batches(&batches).unwrap();
        assert_eq!(a, b);
    }
}
