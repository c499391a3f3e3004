//! Exchange Port
//!
//! The capability every exchange adapter provides: fetch the exchange's
//! pair listing and expose it as a lazily-consumed record sequence.

use async_trait::async_trait;

use crate::domain::PairRecord;

/// Lazily-consumed, finite sequence of normalized pair records.
///
/// Per-item validation, filtering, and logging happen as the caller drains
/// the iterator; a failed fetch is an empty iterator, never an error.
pub type PairIter = Box<dyn Iterator<Item = PairRecord> + Send>;

/// A single exchange's public pair-listing endpoint.
#[async_trait]
pub trait PairSource: Send + Sync {
    /// Registry key for this exchange; also the output column prefix.
    fn name(&self) -> &str;

    /// Fetch the exchange's listing with exactly one HTTP request.
    ///
    /// With `only_traded` set, records the exchange reports as not
    /// currently tradeable are excluded (one warning per excluded record);
    /// exchanges without a status concept always emit all records.
    ///
    /// Transport failures, non-success responses, and malformed response
    /// bodies are absorbed here: they are logged and yield an empty
    /// sequence, so one broken exchange never aborts the run.
    async fn fetch_pairs(&self, only_traded: bool) -> PairIter;
}
