//! Record structure for schema-less catalog rows.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::record::field_value::FieldValue;

/// A record represents a single catalog row returned by the backend.
///
/// Records are open collections of field values: the same logical field may
/// arrive under several different key spellings depending on the data source,
/// and no key beyond the title is guaranteed to be present. Tolerant access
/// lives in the [`resolve`](crate::resolve) module; the record itself stores
/// keys exactly as received and is never mutated by ranking.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Record {
    /// The field values for this record
    fields: AHashMap<String, FieldValue>,
}

impl Record {
    /// Create a new empty record.
    pub fn new() -> Self {
        Record {
            fields: AHashMap::new(),
        }
    }

    /// Add a field value to the record.
    pub fn add_field<S: Into<String>>(&mut self, name: S, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value from the record.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Check if the record has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get all field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Create a builder for constructing records.
    pub fn builder() -> RecordBuilder {
        RecordBuilder::new()
    }
}

/// A builder for constructing records in a fluent manner.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Create a new record builder.
    pub fn new() -> Self {
        RecordBuilder {
            record: Record::new(),
        }
    }

    /// Add a text field to the record.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.record.add_field(name, FieldValue::Text(value.into()));
        self
    }

    /// Add an integer field to the record.
    pub fn add_integer<S: Into<String>>(mut self, name: S, value: i64) -> Self {
        self.record.add_field(name, FieldValue::Integer(value));
        self
    }

    /// Add a float field to the record.
    pub fn add_float<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.record.add_field(name, FieldValue::Float(value));
        self
    }

    /// Add a boolean field to the record.
    pub fn add_boolean<S: Into<String>>(mut self, name: S, value: bool) -> Self {
        self.record.add_field(name, FieldValue::Boolean(value));
        self
    }

    /// Add an explicit null field to the record.
    pub fn add_null<S: Into<String>>(mut self, name: S) -> Self {
        self.record.add_field(name, FieldValue::Null);
        self
    }

    /// Add a field with a generic value.
    pub fn add_field<S: Into<String>>(mut self, name: S, value: FieldValue) -> Self {
        self.record.add_field(name, value);
        self
    }

    /// Build the final record.
    pub fn build(self) -> Record {
        self.record
    }
}
