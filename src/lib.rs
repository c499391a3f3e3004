//! pairscope - unified currency-pair tables across exchange listings
//!
//! Fetches the tradeable-pair listings of configured cryptocurrency
//! exchanges, normalizes every listing into a `base/quote` key, and
//! outer-joins the per-exchange tables into one unified table.
//!
//! # Modules
//!
//! - `domain`: Pair records and the tables built from them
//! - `ports`: Trait abstractions (PairSource, TableSink) and test mocks
//! - `adapters`: Concrete implementations (Binance, OKEx, sinks, CLI)
//! - `application`: The PairAggregator use case
//! - `config`: Configuration loading and validation

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
