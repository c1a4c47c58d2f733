//! Composite scoring and ordering of catalog records.
//!
//! Every search recomputes every score from scratch: a record earns a fixed
//! bonus when it carries a financing-plan document, plus a scaled title
//! similarity against the search term. The sort is stable and descending, so
//! records the client-side signals cannot distinguish keep the backend's
//! order (typically relevance or recency).

use std::cmp::Ordering;

use serde::Serialize;

use crate::record::{FieldValue, Record};
use crate::resolve::{aliases, resolve};
use crate::similarity::similarity;

/// Default bonus for records carrying a financing-plan document.
pub const DEFAULT_FINANCING_BONUS: f64 = 5.0;

/// Default multiplier applied to title similarity.
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 10.0;

/// Tunable scoring weights.
///
/// The defaults are part of the ranking contract; change them only when the
/// expected ordering should genuinely change.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Bonus added when the financing-plan field resolves to a real value.
    pub financing_bonus: f64,
    /// Multiplier applied to the title-similarity term.
    pub similarity_weight: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        RankingConfig {
            financing_bonus: DEFAULT_FINANCING_BONUS,
            similarity_weight: DEFAULT_SIMILARITY_WEIGHT,
        }
    }
}

/// A record paired with its transient ranking score.
///
/// The score exists only to order one search's results; it is skipped during
/// serialization and never persisted or carried across searches.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    /// The underlying catalog record, unchanged.
    #[serde(flatten)]
    pub record: Record,
    /// The composite score for this invocation.
    #[serde(skip)]
    score: f64,
}

impl ScoredRecord {
    /// The composite score this record was ordered by.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Consume the scored wrapper, keeping the record.
    pub fn into_record(self) -> Record {
        self.record
    }
}

/// Scores and orders the records of one search invocation.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    config: RankingConfig,
}

impl RankingEngine {
    /// Create a ranking engine with the default weights.
    pub fn new() -> Self {
        RankingEngine {
            config: RankingConfig::default(),
        }
    }

    /// Create a ranking engine with custom weights.
    pub fn with_config(config: RankingConfig) -> Self {
        RankingEngine { config }
    }

    /// Get the scoring weights.
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Score all records against the search term and return them in
    /// descending score order. Ties keep their input order.
    pub fn rank(&self, records: Vec<Record>, search_term: &str) -> Vec<ScoredRecord> {
        let mut scored: Vec<ScoredRecord> = records
            .into_iter()
            .map(|record| {
                let score = self.score(&record, search_term);
                ScoredRecord { record, score }
            })
            .collect();

        // sort_by is stable; ties preserve the backend's ordering.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    }

    /// Compute the composite score for a single record.
    pub fn score(&self, record: &Record, search_term: &str) -> f64 {
        let mut score = 0.0;

        if resolve(record, aliases::FINANCING_PLAN).is_some() {
            score += self.config.financing_bonus;
        }

        if !search_term.is_empty()
            && let Some(title) = resolve(record, aliases::TITLE).and_then(FieldValue::as_text)
        {
            score += similarity(search_term, title) * self.config.similarity_weight;
        }

        score
    }
}
