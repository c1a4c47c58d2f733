//! Normalization helpers shared by the presentation and transport layers.
//!
//! Two fields need cleanup before anyone can use them: document paths
//! (sometimes absolute URLs, sometimes bare backend paths, sometimes a
//! textual placeholder) and budgets (sometimes numeric, sometimes a
//! formatted string with grouping and a currency symbol). Each gets exactly
//! one normalization function so the rules cannot drift between call sites.

/// Normalize a document path for link construction.
///
/// Placeholder text (`nan`, `null`, `none`, empty, case-insensitive) maps to
/// `None`. Absolute `http(s)` URLs pass through untouched; bare paths gain a
/// leading slash.
pub fn normalize_document_path(raw: &str) -> Option<String> {
    let path = raw.trim();
    if path.is_empty() {
        return None;
    }
    if matches!(path.to_lowercase().as_str(), "nan" | "null" | "none") {
        return None;
    }

    if path.starts_with("http") || path.starts_with('/') {
        Some(path.to_string())
    } else {
        Some(format!("/{path}"))
    }
}

/// Parse a budget value out of arbitrarily formatted text.
///
/// Strips every non-digit character and parses the rest as integer euros, so
/// `"1 200 000 €"`, `"1,200,000"`, and `"1200000"` all agree. Text with no
/// digits at all yields `None`.
pub fn parse_budget(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
