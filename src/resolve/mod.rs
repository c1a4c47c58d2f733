//! Tolerant field access over loosely-keyed records.
//!
//! The same logical field arrives under several key spellings depending on
//! the data source, and a present key may still carry a textual stand-in for
//! "no data" (`"None"`, `"NaN"`, `"null"`, or the empty string). [`resolve`]
//! walks an ordered alias list and returns the first value that is actually
//! worth something, leaving the value itself untouched; type coercion is the
//! presenter's concern.
//!
//! # Examples
//!
//! ```
//! use cinerank::record::Record;
//! use cinerank::resolve::{aliases, resolve};
//!
//! let record = Record::builder()
//!     .add_text("dateimmatriculation", "2020-01-01")
//!     .add_text("budget", "None")
//!     .build();
//!
//! let date = resolve(&record, aliases::REGISTRATION_DATE).unwrap();
//! assert_eq!(date.as_text(), Some("2020-01-01"));
//!
//! // A placeholder token counts as absent even though the key is present.
//! assert!(resolve(&record, aliases::BUDGET).is_none());
//! ```

pub mod aliases;

use crate::record::{FieldValue, Record};

/// Textual tokens that mean "no data" even when present as a field value.
pub const PLACEHOLDER_TOKENS: &[&str] = &["None", "NaN", "null"];

/// Resolve a logical field: the first alias whose value is present, non-null,
/// and not a placeholder. `None` is a normal outcome, not an error.
pub fn resolve<'a>(record: &'a Record, aliases: &[&str]) -> Option<&'a FieldValue> {
    for alias in aliases {
        if let Some(value) = record.get_field(alias)
            && is_real_value(value)
        {
            return Some(value);
        }
    }
    None
}

/// Resolve a logical field to its text form.
///
/// Convenience for display extraction; numeric values are rendered with
/// their `Display` form.
pub fn resolve_text(record: &Record, aliases: &[&str]) -> Option<String> {
    resolve(record, aliases).map(|value| value.to_string())
}

/// Whether a present value is real data rather than a null or placeholder.
/// The comparison is an exact match on the value's text form, so numeric
/// values can never be placeholders.
fn is_real_value(value: &FieldValue) -> bool {
    match value {
        FieldValue::Null => false,
        FieldValue::Text(s) => !s.is_empty() && !PLACEHOLDER_TOKENS.contains(&s.as_str()),
        _ => true,
    }
}
