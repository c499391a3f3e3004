//! Normalized Pair Record
//!
//! The triple an exchange adapter emits for every listed pair: the
//! exchange-specific symbol plus the normalized base/quote asset names.

/// One tradeable pair as reported by a single exchange.
///
/// Transient: records are consumed while building a per-exchange table and
/// are never persisted standalone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRecord {
    /// Exchange-specific symbol (e.g. `BTCUSDT` on Binance, `BTC-USDT` on OKEx)
    pub symbol: String,
    /// Normalized base asset (e.g. `BTC`)
    pub base: String,
    /// Normalized quote asset (e.g. `USDT`)
    pub quote: String,
}

impl PairRecord {
    pub fn new(
        symbol: impl Into<String>,
        base: impl Into<String>,
        quote: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Exchange-independent key for this pair: `base/quote`.
    pub fn unified_key(&self) -> String {
        format!("{}/{}", self.base, self.quote)
    }
}
