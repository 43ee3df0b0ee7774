//! Debounced, single-flight access to a [`FactorCatalog`]

use super::{FactorCatalog, SearchConfig, SearchRequest, SearchResponse};
use crate::CarbonResult;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Completed(SearchResponse),
    /// A newer search was triggered before this one was sent
    Superseded,
}

/// Serializes catalog searches and coalesces bursts of triggers
///
/// Every call waits for the debounce period; only the most recent trigger proceeds. At most one
/// request is outstanding at a time. Dropping the returned future cancels the call.
pub struct SearchGate<C> {
    catalog: C,
    in_flight: Mutex<()>,
    generation: AtomicU64,
    debounce: Duration,
}

impl<C: FactorCatalog> SearchGate<C> {
    pub fn new(catalog: C, config: &SearchConfig) -> Self {
        Self {
            catalog,
            in_flight: Mutex::new(()),
            generation: AtomicU64::new(0),
            debounce: config.debounce,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub async fn search(&self, request: SearchRequest) -> CarbonResult<SearchOutcome> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if self.is_stale(ticket) {
            trace!(ticket, "search superseded during debounce");
            return Ok(SearchOutcome::Superseded);
        }

        let _guard = self.in_flight.lock().await;
        if self.is_stale(ticket) {
            trace!(ticket, "search superseded while waiting for the previous one");
            return Ok(SearchOutcome::Superseded);
        }

        debug!(
            query = request.query.as_deref().unwrap_or(""),
            unit_types = ?request.unit_type,
            page = request.page,
            "searching emission factor catalog"
        );
        let response = self.catalog.search(&request).await?;
        debug!(results = response.results.len(), "catalog search finished");
        Ok(SearchOutcome::Completed(response))
    }

    fn is_stale(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != ticket
    }
}
