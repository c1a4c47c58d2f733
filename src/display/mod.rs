//! Alias-resolved display fields for a result card.
//!
//! The presenter needs one clean value per card slot, not a record with
//! drifting key names. [`CardFields`] runs the alias tables once per record
//! and normalizes the document paths; formatting (currency, dates, markup)
//! stays with the presenter.

use serde::Serialize;

use crate::normalize::normalize_document_path;
use crate::record::Record;
use crate::resolve::{aliases, resolve_text};

/// Sentinel shown when a record has no resolvable title. Display only;
/// scoring treats a missing title as similarity 0, never as this text.
pub const UNKNOWN_TITLE: &str = "Titre inconnu";

/// The extracted, presenter-ready fields of one result card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardFields {
    /// Title, or [`UNKNOWN_TITLE`] when absent.
    pub title: String,
    /// Registration date, as received.
    pub date: Option<String>,
    /// Budget text, unformatted (see [`crate::normalize::parse_budget`]).
    pub budget: Option<String>,
    /// Production company or nationality.
    pub production: Option<String>,
    /// Genre or metrage category.
    pub genre: Option<String>,
    /// Synopsis, TMDB variant preferred.
    pub synopsis: Option<String>,
    /// Director list.
    pub directors: Option<String>,
    /// Writer list.
    pub writers: Option<String>,
    /// Producer list.
    pub producers: Option<String>,
    /// Cast list.
    pub cast: Option<String>,
    /// Normalized financing-plan document path.
    pub financing_plan: Option<String>,
    /// Normalized budget-estimate document path.
    pub estimate_document: Option<String>,
}

impl CardFields {
    /// Extract card fields from a record via the alias tables.
    pub fn from_record(record: &Record) -> Self {
        CardFields {
            title: resolve_text(record, aliases::TITLE).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            date: resolve_text(record, aliases::REGISTRATION_DATE),
            budget: resolve_text(record, aliases::BUDGET),
            production: resolve_text(record, aliases::PRODUCTION),
            genre: resolve_text(record, aliases::GENRE),
            synopsis: resolve_text(record, aliases::SYNOPSIS),
            directors: resolve_text(record, aliases::DIRECTORS),
            writers: resolve_text(record, aliases::WRITERS),
            producers: resolve_text(record, aliases::PRODUCERS),
            cast: resolve_text(record, aliases::CAST),
            financing_plan: resolve_text(record, aliases::FINANCING_PLAN)
                .and_then(|path| normalize_document_path(&path)),
            estimate_document: resolve_text(record, aliases::ESTIMATE_DOCUMENT)
                .and_then(|path| normalize_document_path(&path)),
        }
    }

    /// Whether any person field resolved (the presenter hides the whole
    /// block otherwise).
    pub fn has_people(&self) -> bool {
        self.directors.is_some()
            || self.writers.is_some()
            || self.producers.is_some()
            || self.cast.is_some()
    }
}
