//! Normalized string similarity between a search term and a candidate title.
//!
//! The score is `(L - d) / L` where `L` is the char length of the longer
//! string and `d` the unit-cost Levenshtein distance: 1.0 means identical,
//! 0.0 means maximal divergence relative to the longer string. Comparison is
//! case-insensitive; no trimming or accent folding is applied, so
//! `"Amélie"` and `"Amelie"` are close but not identical. That simplicity is
//! deliberate.

pub mod levenshtein;

pub use self::levenshtein::levenshtein_distance;

/// Normalized similarity in [0.0, 1.0] between two strings.
///
/// An empty input scores 0 against anything, including another empty string.
///
/// # Examples
///
/// ```
/// use cinerank::similarity::similarity;
///
/// assert_eq!(similarity("Matrix", "matrix"), 1.0);
/// assert_eq!(similarity("", "Matrix"), 0.0);
/// assert!((similarity("kitten", "sitting") - 4.0 / 7.0).abs() < 1e-9);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let longer_length = a.chars().count().max(b.chars().count());
    if longer_length == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(&a, &b);
    (longer_length - distance) as f64 / longer_length as f64
}
