use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, Float64Array, Int64Array, RecordBatch, StringArray, TimestampMicrosecondArray,
};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use parquet::arrow::ArrowWriter;

use crate::errors::GenerationError;
use crate::records::{FieldSpec, FieldType, FieldValue, Record};

/// Write records as a parquet file with one typed column per schema field.
///
/// The table carries only the schema columns; there is no row-index column.
pub fn write_records_parquet(
    path: &Path,
    fields: &[FieldSpec],
    records: &[Record],
) -> Result<u64, GenerationError> {
    let mut arrow_fields = Vec::with_capacity(fields.len());
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(fields.len());

    for spec in fields {
        let (data_type, array) = build_column(spec, records);
        arrow_fields.push(Field::new(spec.name, data_type, false));
        columns.push(array);
    }

    let schema = Arc::new(Schema::new(arrow_fields));
    let batch = RecordBatch::try_new(schema.clone(), columns)?;

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(std::fs::metadata(path)?.len())
}

fn build_column(spec: &FieldSpec, records: &[Record]) -> (DataType, ArrayRef) {
    match spec.field_type {
        FieldType::Int => {
            let values: Vec<i64> = records
                .iter()
                .map(|record| {
                    record
                        .get(spec.name)
                        .and_then(FieldValue::as_i64)
                        .unwrap_or_default()
                })
                .collect();
            (DataType::Int64, Arc::new(Int64Array::from(values)) as ArrayRef)
        }
        FieldType::Float => {
            let values: Vec<f64> = records
                .iter()
                .map(|record| {
                    record
                        .get(spec.name)
                        .and_then(FieldValue::as_f64)
                        .unwrap_or_default()
                })
                .collect();
            (
                DataType::Float64,
                Arc::new(Float64Array::from(values)) as ArrayRef,
            )
        }
        FieldType::Text => {
            let values: Vec<String> = records
                .iter()
                .map(|record| {
                    record
                        .get(spec.name)
                        .and_then(FieldValue::as_str)
                        .unwrap_or_default()
                        .to_string()
                })
                .collect();
            (DataType::Utf8, Arc::new(StringArray::from(values)) as ArrayRef)
        }
        FieldType::Timestamp => {
            let values: Vec<i64> = records
                .iter()
                .map(|record| {
                    record
                        .get(spec.name)
                        .and_then(FieldValue::as_timestamp)
                        .map(|value| value.and_utc().timestamp_micros())
                        .unwrap_or_default()
                })
                .collect();
            (
                DataType::Timestamp(TimeUnit::Microsecond, None),
                Arc::new(TimestampMicrosecondArray::from(values)) as ArrayRef,
            )
        }
    }
}
