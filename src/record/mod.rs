//! Catalog records and their field values.

pub mod field_value;
#[allow(clippy::module_inception)]
pub mod record;

pub use self::field_value::FieldValue;
pub use self::record::{Record, RecordBuilder};
