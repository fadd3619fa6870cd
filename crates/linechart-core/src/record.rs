// File: crates/linechart-core/src/record.rs
// Summary: Flat data records and tolerant field accessors.

use serde_json::{Map, Value};

use crate::error::ChartError;

/// One flat input record: field name to value.
pub type Record = Map<String, Value>;

/// Category label of `record` under `x_key`, or `None` when the field is missing or not a scalar.
pub fn x_label(record: &Record, x_key: &str) -> Option<String> {
    match record.get(x_key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric value of `record` under `key`. Anything but a finite number is absent.
pub fn y_value(record: &Record, key: &str) -> Option<f64> {
    record.get(key)?.as_f64().filter(|v| v.is_finite())
}

/// Parse a JSON array of flat objects.
pub fn records_from_json(json: &str) -> Result<Vec<Record>, ChartError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(ChartError::InvalidRecords("expected a JSON array of objects".into()));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(map),
            other => Err(ChartError::InvalidRecords(format!("item {i} is not an object: {other}"))),
        })
        .collect()
}

/// Build a record from `(field, value)` pairs.
pub fn record<K, I>(fields: I) -> Record
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    fields.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
