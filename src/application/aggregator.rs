//! Pair Aggregator
//!
//! Turns the configured list of exchange names into the unified table:
//! resolves each name to a registered source, materializes the source's
//! record sequence into a per-exchange table, and folds the tables together
//! via full outer join on the unified key.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{ExchangeTable, UnifiedTable};
use crate::ports::exchange::PairSource;

#[derive(Debug, Error)]
pub enum AggregatorError {
    /// A configured name matched no registered source. Fatal: this is
    /// misconfiguration, not a transient upstream failure.
    #[error("Not implemented exchange: {0}")]
    UnsupportedExchange(String),
}

/// Orchestrates the registered pair sources over the configured exchanges.
///
/// The registry is open: any `PairSource` can be added without touching the
/// aggregation logic. The configured name list keeps its order and its
/// duplicates, if any.
pub struct PairAggregator {
    exchanges: Vec<String>,
    sources: HashMap<String, Box<dyn PairSource>>,
}

impl PairAggregator {
    pub fn new(exchanges: Vec<String>) -> Self {
        tracing::debug!("PairAggregator::new: exchanges={:?}", exchanges);
        Self {
            exchanges,
            sources: HashMap::new(),
        }
    }

    /// Builder method to register a source under its own name.
    pub fn register(mut self, source: Box<dyn PairSource>) -> Self {
        self.sources.insert(source.name().to_string(), source);
        self
    }

    /// The configured exchange list, as a copy so callers cannot mutate the
    /// aggregator's configuration.
    pub fn exchanges(&self) -> Vec<String> {
        self.exchanges.clone()
    }

    /// Fetch and outer-join every configured exchange, in configured order.
    ///
    /// Resolution failure for any name aborts the run before that name's
    /// network call; per-exchange fetch failures were already absorbed by
    /// the sources and show up as empty contributions.
    pub async fn load_pairs(&self, only_traded: bool) -> Result<UnifiedTable, AggregatorError> {
        let mut unified = UnifiedTable::new();
        for name in &self.exchanges {
            let source = self
                .sources
                .get(name)
                .ok_or_else(|| AggregatorError::UnsupportedExchange(name.clone()))?;
            tracing::debug!(
                "load_exchange_pairs: exchange={}, only_traded={}",
                name,
                only_traded
            );
            let records = source.fetch_pairs(only_traded).await;
            let table = ExchangeTable::from_records(name, records);
            tracing::info!("{}: {} pairs loaded", name, table.len());
            unified.join(table);
        }
        Ok(unified)
    }
}
