//! Adapters: concrete implementations behind the ports.
//!
//! - `binance` / `okex`: exchange listing clients implementing `PairSource`
//! - `sink`: CSV and terminal implementations of `TableSink`
//! - `cli`: command-line argument surface

pub mod binance;
pub mod cli;
pub mod okex;
pub mod sink;

pub use binance::{BinanceConfig, BinanceSource};
pub use cli::CliApp;
pub use okex::{OkexConfig, OkexSource};
pub use sink::{ConsoleSink, CsvSink};
