//! Application layer: the aggregation use case.

pub mod aggregator;

pub use aggregator::{AggregatorError, PairAggregator};
