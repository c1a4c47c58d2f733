//! Field value types for catalog records.
//!
//! A backend row carries strings, numbers, booleans, and explicit nulls with
//! no fixed schema. [`FieldValue`] is serde-untagged so a raw JSON row
//! deserializes directly into record fields without an intermediate mapping
//! step. Nested arrays and objects are not part of the catalog shape; the
//! response layer rejects them before a record is built.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a value for a field in a catalog record.
///
/// # Examples
///
/// ```
/// use cinerank::record::FieldValue;
///
/// let title = FieldValue::Text("La Haine".to_string());
/// assert_eq!(title.as_text(), Some("La Haine"));
///
/// let year = FieldValue::Integer(1995);
/// assert_eq!(year.to_string(), "1995");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
}

impl FieldValue {
    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to an integer if this is a numeric value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    /// Whether this value is the explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Text form of a value, used for placeholder comparison and display.
/// Null renders as the empty string.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Boolean(b) => write!(f, "{b}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}
