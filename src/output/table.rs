//! Tabular view of API records
//!
//! Converts JSON records into an Arrow RecordBatch. Columns appear in the
//! order their keys are first seen; types are inferred across all rows.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use arrow::array::{
    ArrayRef, BooleanArray, Float64Array, Int64Array, ListArray, NullArray, StringArray,
    StructArray,
};
use arrow::buffer::OffsetBuffer;
use arrow::datatypes::{DataType, Field, Fields, Schema};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// Column holding records that are not objects
pub const VALUE_COLUMN: &str = "value";

/// View a record as a row: objects as-is, anything else under [`VALUE_COLUMN`]
fn as_row(record: &JsonValue) -> Cow<'_, JsonObject> {
    match record {
        JsonValue::Object(obj) => Cow::Borrowed(obj),
        other => {
            let mut row = JsonObject::new();
            row.insert(VALUE_COLUMN.to_string(), other.clone());
            Cow::Owned(row)
        }
    }
}

/// Infer an Arrow schema from a set of JSON records
///
/// Every field is nullable. Fields keep first-appearance order.
pub fn infer_schema(records: &[JsonValue]) -> Schema {
    let mut order: Vec<(String, DataType)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        for (key, value) in as_row(record).iter() {
            let inferred = infer_type(value);
            match index.get(key) {
                Some(&i) => order[i].1 = merge_types(&order[i].1, &inferred),
                None => {
                    index.insert(key.clone(), order.len());
                    order.push((key.clone(), inferred));
                }
            }
        }
    }

    Schema::new(
        order
            .into_iter()
            .map(|(name, dtype)| Field::new(name, dtype, true))
            .collect::<Vec<_>>(),
    )
}

/// Convert a collection of records into a table, one row per record
pub fn records_to_table(records: &[JsonValue]) -> Result<RecordBatch> {
    let schema = Arc::new(infer_schema(records));

    if records.is_empty() {
        return Ok(RecordBatch::new_empty(schema));
    }

    let rows: Vec<Cow<'_, JsonObject>> = records.iter().map(as_row).collect();
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len());

    for field in schema.fields() {
        let values: Vec<Option<&JsonValue>> = rows.iter().map(|row| row.get(field.name())).collect();
        columns.push(build_array(&values, field.data_type())?);
    }

    let options = RecordBatchOptions::new().with_row_count(Some(rows.len()));
    RecordBatch::try_new_with_options(schema, columns, &options)
        .map_err(|e| Error::output(format!("Failed to create RecordBatch: {e}")))
}

/// Convert a single API response into a table
///
/// Arrays become one row per element, anything else a single row.
pub fn record_to_table(value: &JsonValue) -> Result<RecordBatch> {
    match value {
        JsonValue::Array(items) => records_to_table(items),
        other => records_to_table(std::slice::from_ref(other)),
    }
}

fn infer_type(value: &JsonValue) -> DataType {
    match value {
        JsonValue::Null => DataType::Null,
        JsonValue::Bool(_) => DataType::Boolean,
        JsonValue::Number(n) => {
            if n.is_i64() {
                DataType::Int64
            } else {
                DataType::Float64
            }
        }
        JsonValue::String(_) => DataType::Utf8,
        JsonValue::Array(arr) => {
            let element_type = arr
                .iter()
                .filter(|v| !v.is_null())
                .map(infer_type)
                .reduce(|a, b| merge_types(&a, &b))
                .unwrap_or(DataType::Null);
            DataType::List(Arc::new(Field::new("item", element_type, true)))
        }
        // A struct needs at least one child to carry its length
        JsonValue::Object(obj) if obj.is_empty() => DataType::Null,
        JsonValue::Object(obj) => {
            let fields: Vec<Field> = obj
                .iter()
                .map(|(k, v)| Field::new(k, infer_type(v), true))
                .collect();
            DataType::Struct(Fields::from(fields))
        }
    }
}

fn merge_types(type1: &DataType, type2: &DataType) -> DataType {
    match (type1, type2) {
        (a, b) if a == b => a.clone(),

        (DataType::Null, other) | (other, DataType::Null) => other.clone(),

        (DataType::Int64, DataType::Float64) | (DataType::Float64, DataType::Int64) => {
            DataType::Float64
        }

        (DataType::List(a), DataType::List(b)) => DataType::List(Arc::new(Field::new(
            "item",
            merge_types(a.data_type(), b.data_type()),
            true,
        ))),

        // Mixed kinds are kept as text
        _ => DataType::Utf8,
    }
}

fn build_array(values: &[Option<&JsonValue>], data_type: &DataType) -> Result<ArrayRef> {
    match data_type {
        DataType::Null => Ok(Arc::new(NullArray::new(values.len()))),

        DataType::Boolean => {
            let arr: BooleanArray = values.iter().map(|v| v.and_then(JsonValue::as_bool)).collect();
            Ok(Arc::new(arr))
        }

        DataType::Int64 => {
            let arr: Int64Array = values.iter().map(|v| v.and_then(JsonValue::as_i64)).collect();
            Ok(Arc::new(arr))
        }

        DataType::Float64 => {
            let arr: Float64Array = values.iter().map(|v| v.and_then(JsonValue::as_f64)).collect();
            Ok(Arc::new(arr))
        }

        DataType::List(field) => build_list_array(values, field),

        DataType::Struct(fields) => build_struct_array(values, fields),

        _ => {
            let arr: StringArray = values
                .iter()
                .map(|v| {
                    v.filter(|v| !v.is_null()).map(|v| match v {
                        JsonValue::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                })
                .collect();
            Ok(Arc::new(arr))
        }
    }
}

fn build_list_array(values: &[Option<&JsonValue>], field: &Arc<Field>) -> Result<ArrayRef> {
    let mut items: Vec<Option<&JsonValue>> = Vec::new();
    let mut offsets: Vec<i32> = vec![0];

    for value in values {
        if let Some(JsonValue::Array(arr)) = value {
            items.extend(arr.iter().map(Some));
        }
        let offset = i32::try_from(items.len())
            .map_err(|_| Error::output("Array too large for i32 offset"))?;
        offsets.push(offset);
    }

    let items_array = build_array(&items, field.data_type())?;
    let list = ListArray::new(
        Arc::clone(field),
        OffsetBuffer::new(offsets.into()),
        items_array,
        None,
    );
    Ok(Arc::new(list))
}

fn build_struct_array(values: &[Option<&JsonValue>], fields: &Fields) -> Result<ArrayRef> {
    let mut children: Vec<ArrayRef> = Vec::with_capacity(fields.len());

    for field in fields {
        let child_values: Vec<Option<&JsonValue>> = values
            .iter()
            .map(|v| v.and_then(|v| v.get(field.name())))
            .collect();
        children.push(build_array(&child_values, field.data_type())?);
    }

    Ok(Arc::new(StructArray::new(fields.clone(), children, None)))
}
