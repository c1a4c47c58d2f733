//! High-level search facade wiring the backend source to validation and
//! ranking.

use std::sync::Arc;

use crate::error::{CinerankError, Result};
use crate::filters::SearchFilters;
use crate::ranking::{RankingConfig, RankingEngine, ScoredRecord};
use crate::response;
use crate::source::{RecordSource, RequestSequencer};

/// Runs one search end to end: fetch the raw payload from the source,
/// validate its shape, score every record, and return the ranked list.
///
/// The engine holds no record state between searches; every invocation
/// ranks a freshly fetched list. Overlapping searches are sequenced: a
/// search whose response arrives after a newer search has started fails
/// with [`CinerankError::Superseded`] rather than delivering stale results.
pub struct SearchEngine {
    /// The backend collaborator.
    source: Arc<dyn RecordSource>,
    /// The scoring and ordering core.
    ranker: RankingEngine,
    /// Generation counter guarding overlapping searches.
    sequencer: RequestSequencer,
}

impl SearchEngine {
    /// Create a search engine over the given source with default ranking
    /// weights.
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        SearchEngine {
            source,
            ranker: RankingEngine::new(),
            sequencer: RequestSequencer::new(),
        }
    }

    /// Create a search engine with custom ranking weights.
    pub fn with_config(source: Arc<dyn RecordSource>, config: RankingConfig) -> Self {
        SearchEngine {
            source,
            ranker: RankingEngine::with_config(config),
            sequencer: RequestSequencer::new(),
        }
    }

    /// Get the ranking core.
    pub fn ranker(&self) -> &RankingEngine {
        &self.ranker
    }

    /// Execute a search and return records in descending score order.
    ///
    /// An empty result list is a valid outcome; an error-shaped payload is
    /// not and surfaces as [`CinerankError::InvalidResponse`].
    pub async fn search(&self, filters: &SearchFilters) -> Result<Vec<ScoredRecord>> {
        let ticket = self.sequencer.begin();
        log::debug!("search generation {} started", ticket.generation());

        let payload = self.source.fetch(filters).await?;

        if !self.sequencer.is_current(&ticket) {
            log::debug!(
                "search generation {} superseded before its response arrived",
                ticket.generation()
            );
            return Err(CinerankError::superseded(format!(
                "search generation {} is no longer current",
                ticket.generation()
            )));
        }

        let records = response::parse_records(&payload)?;
        let ranked = self.ranker.rank(records, filters.search_term());

        log::debug!(
            "search generation {} ranked {} records",
            ticket.generation(),
            ranked.len()
        );
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};

    struct FixedSource {
        payload: Value,
    }

    #[async_trait]
    impl RecordSource for FixedSource {
        async fn fetch(&self, _filters: &SearchFilters) -> Result<Value> {
            Ok(self.payload.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RecordSource for FailingSource {
        async fn fetch(&self, _filters: &SearchFilters) -> Result<Value> {
            Err(CinerankError::transport("connection reset"))
        }
    }

    fn engine_with(payload: Value) -> SearchEngine {
        SearchEngine::new(Arc::new(FixedSource { payload }))
    }

    #[tokio::test]
    async fn test_search_ranks_fetched_records() {
        let engine = engine_with(json!([
            {"titre": "The Matrix Reloaded"},
            {"titre": "Matrix"}
        ]));

        let ranked = engine
            .search(&SearchFilters::for_title("Matrix"))
            .await
            .unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(
            ranked[0].record.get_field("titre").unwrap().as_text(),
            Some("Matrix")
        );
    }

    #[test]
    fn test_search_with_empty_result_set() {
        let engine = engine_with(json!([]));
        let ranked = tokio_test::block_on(engine.search(&SearchFilters::default())).unwrap();
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_custom_ranking_weights() {
        let source = Arc::new(FixedSource {
            payload: json!([{"titre": "Matrix", "plan_financement": "plan.pdf"}]),
        });
        let engine = SearchEngine::with_config(
            source,
            RankingConfig {
                financing_bonus: 100.0,
                similarity_weight: 10.0,
            },
        );
        assert_eq!(engine.ranker().config().financing_bonus, 100.0);

        let ranked = engine
            .search(&SearchFilters::for_title("Matrix"))
            .await
            .unwrap();
        assert_eq!(ranked[0].score(), 110.0);
    }

    #[tokio::test]
    async fn test_error_payload_is_surfaced() {
        let engine = engine_with(json!({"error": "database unavailable"}));
        let err = engine.search(&SearchFilters::default()).await.unwrap_err();
        assert!(matches!(err, CinerankError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let engine = SearchEngine::new(Arc::new(FailingSource));
        let err = engine.search(&SearchFilters::default()).await.unwrap_err();
        assert!(matches!(err, CinerankError::Transport(_)));
    }
}
