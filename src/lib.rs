//! # Cinerank
//!
//! Result normalization, fuzzy matching, and ranking for film-catalog search.
//!
//! A backend query returns catalog rows whose field names drift between data
//! sources (`dateimmatriculation` vs `date_immatriculation`, `budget` vs
//! `devis`, and so on). This crate extracts canonical values from those rows,
//! scores each row against the user's search term with a normalized
//! Levenshtein similarity, folds in business-priority signals, and returns a
//! stably ordered result list for a presenter to render.
//!
//! ## Components
//!
//! - Tolerant field access over loosely-keyed records ([`resolve`])
//! - Normalized edit-distance similarity ([`similarity`])
//! - Composite scoring and stable ordering ([`ranking`])
//! - Response shape validation ([`response`])
//! - A search facade over a pluggable backend source ([`engine`])

pub mod display;
pub mod engine;
pub mod error;
pub mod filters;
pub mod normalize;
pub mod ranking;
pub mod record;
pub mod resolve;
pub mod response;
pub mod similarity;
pub mod source;

pub use crate::engine::SearchEngine;
pub use crate::error::{CinerankError, Result};
pub use crate::filters::SearchFilters;
pub use crate::ranking::{RankingConfig, RankingEngine, ScoredRecord};
pub use crate::record::{FieldValue, Record};
pub use crate::source::RecordSource;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
