//! Backend payload shape validation.
//!
//! The backend answers a search with either a JSON array of row objects or
//! an error-shaped object (one carrying an `error` field). Only the former
//! may be ranked; this module converts it into records and fails fast on
//! everything else, so the caller can distinguish a valid empty result set
//! (render the empty state) from a response that must not be scored as data.

use serde_json::Value;

use crate::error::{CinerankError, Result};
use crate::record::{FieldValue, Record};

/// Key the backend uses for error-shaped payloads.
const ERROR_KEY: &str = "error";

/// Convert a decoded payload into records, refusing anything that is not a
/// record array.
pub fn parse_records(payload: &Value) -> Result<Vec<Record>> {
    match payload {
        Value::Array(rows) => rows.iter().map(record_from_row).collect(),
        Value::Object(map) => {
            if let Some(message) = map.get(ERROR_KEY) {
                Err(CinerankError::invalid_response(format!(
                    "backend returned an error payload: {message}"
                )))
            } else {
                Err(CinerankError::invalid_response(
                    "expected a record array, got an object",
                ))
            }
        }
        other => Err(CinerankError::invalid_response(format!(
            "expected a record array, got {other}"
        ))),
    }
}

/// Decode a raw payload string and convert it into records.
pub fn parse_payload(payload: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(payload)?;
    parse_records(&value)
}

fn record_from_row(row: &Value) -> Result<Record> {
    let Value::Object(map) = row else {
        return Err(CinerankError::invalid_response(format!(
            "expected a row object, got {row}"
        )));
    };

    let mut record = Record::new();
    for (key, value) in map {
        let field = field_value_from_json(value).ok_or_else(|| {
            CinerankError::invalid_response(format!("unsupported value shape for field `{key}`"))
        })?;
        record.add_field(key.clone(), field);
    }
    Ok(record)
}

/// Scalar JSON values map directly; arrays and objects are not part of the
/// catalog row shape.
fn field_value_from_json(value: &Value) -> Option<FieldValue> {
    match value {
        Value::Null => Some(FieldValue::Null),
        Value::Bool(b) => Some(FieldValue::Boolean(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(FieldValue::Integer(i))
            } else {
                n.as_f64().map(FieldValue::Float)
            }
        }
        Value::String(s) => Some(FieldValue::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => None,
    }
}
