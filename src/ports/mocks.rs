//! Mock pair source that records calls and replays configured records.
//!
//! Used by aggregator unit tests and the integration suite; kept public so
//! `tests/` can build deterministic, no-network pipelines.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::PairRecord;
use crate::ports::exchange::{PairIter, PairSource};

/// Clones share the call log, so a test can keep a probe clone while the
/// aggregator owns the registered source.
#[derive(Debug, Clone, Default)]
pub struct MockPairSource {
    name: String,
    records: Vec<PairRecord>,
    calls: Arc<Mutex<Vec<bool>>>,
}

impl MockPairSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Builder method to add one record to the replayed sequence.
    pub fn with_record(mut self, symbol: &str, base: &str, quote: &str) -> Self {
        self.records.push(PairRecord::new(symbol, base, quote));
        self
    }

    /// The `only_traded` flag of every `fetch_pairs` call, in call order.
    pub fn get_calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PairSource for MockPairSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_pairs(&self, only_traded: bool) -> PairIter {
        self.calls.lock().unwrap().push(only_traded);
        Box::new(self.records.clone().into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_records_and_records_calls() {
        let source = MockPairSource::new("mock").with_record("BTCUSDT", "BTC", "USDT");

        let first: Vec<_> = source.fetch_pairs(true).await.collect();
        let second: Vec<_> = source.fetch_pairs(false).await.collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![PairRecord::new("BTCUSDT", "BTC", "USDT")]);
        assert_eq!(source.get_calls(), vec![true, false]);
    }
}
