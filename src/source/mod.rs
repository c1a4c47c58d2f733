//! The backend boundary and overlapping-request sequencing.
//!
//! [`RecordSource`] is the only suspension point in a search: it fetches the
//! raw payload for a filter set. Everything downstream (validation, scoring,
//! ordering) is synchronous and pure. [`RequestSequencer`] hands out
//! monotonically increasing generation tickets so that when searches
//! overlap, a response that arrives after a newer search started can be
//! detected and discarded instead of overwriting fresher results.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::filters::SearchFilters;

/// A backend that answers a filter set with a raw JSON payload.
///
/// Implementations own transport concerns (HTTP, retries, decoding to
/// `serde_json::Value`); failures surface as
/// [`CinerankError::Transport`](crate::error::CinerankError::Transport).
/// Shape validation of the payload stays in the core.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the raw record payload for the given filters.
    async fn fetch(&self, filters: &SearchFilters) -> Result<Value>;
}

/// Monotonic generation counter for overlapping searches.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

/// A ticket for one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    /// The generation this ticket was issued at.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl RequestSequencer {
    /// Create a new sequencer.
    pub fn new() -> Self {
        RequestSequencer {
            latest: AtomicU64::new(0),
        }
    }

    /// Start a new search generation, superseding all earlier tickets.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket { generation }
    }

    /// Whether the ticket still belongs to the most recent search.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.generation
    }
}
