//! Binance Listing Adapter
//!
//! Fetches the spot pair listing from Binance's public `exchangeInfo`
//! endpoint. Binance reports a per-pair trading status; `TRADING` means the
//! pair is currently tradeable, anything else is filtered out (with a
//! warning) when only traded pairs are requested.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::PairRecord;
use crate::ports::exchange::{PairIter, PairSource};

const PAIRS_ENDPOINT: &str = "/api/v3/exchangeInfo";

/// Binance adapter configuration
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    /// Base URL for the public REST API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.binance.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Binance pair-listing client
#[derive(Debug, Clone)]
pub struct BinanceSource {
    config: BinanceConfig,
    http: Client,
}

impl BinanceSource {
    /// Create a new client with the default configuration
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(BinanceConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: BinanceConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }
}

/// Top-level `exchangeInfo` response
#[derive(Debug, Deserialize)]
struct ExchangeInfo {
    symbols: Vec<RawSymbol>,
}

/// One listing item; every field is optional so a single malformed item can
/// be skipped without failing the whole decode.
#[derive(Debug, Deserialize)]
struct RawSymbol {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default, rename = "baseAsset")]
    base_asset: Option<String>,
    #[serde(default, rename = "quoteAsset")]
    quote_asset: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Lazy per-item stage: validate mandatory fields, apply the status gate.
fn extract_records(
    symbols: Vec<RawSymbol>,
    only_traded: bool,
) -> impl Iterator<Item = PairRecord> {
    symbols.into_iter().filter_map(move |raw| {
        let (symbol, base, quote, status) =
            match (raw.symbol, raw.base_asset, raw.quote_asset, raw.status) {
                (Some(symbol), Some(base), Some(quote), Some(status)) => {
                    (symbol, base, quote, status)
                }
                (symbol, _, _, _) => {
                    tracing::error!(
                        "Missed one of mandatory fields: (`symbol`, `baseAsset`, `quoteAsset`, `status`). Bad pair: {:?}",
                        symbol
                    );
                    return None;
                }
            };
        if status == "TRADING" {
            Some(PairRecord::new(symbol, base, quote))
        } else if only_traded {
            tracing::warn!("Untradeable pair: {} with status={}", symbol, status);
            None
        } else {
            Some(PairRecord::new(symbol, base, quote))
        }
    })
}

#[async_trait]
impl PairSource for BinanceSource {
    fn name(&self) -> &str {
        "binance"
    }

    async fn fetch_pairs(&self, only_traded: bool) -> PairIter {
        let url = format!("{}{}", self.config.base_url, PAIRS_ENDPOINT);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Binance request {}. Transport error: {}", url, e);
                return Box::new(std::iter::empty());
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            tracing::error!(
                "Binance request {}. Response code: {}. Error: {}",
                url,
                status.as_u16(),
                body
            );
            return Box::new(std::iter::empty());
        }

        let info: ExchangeInfo = match serde_json::from_str(&body) {
            Ok(info) => info,
            // A syntax error means the body is not JSON at all; anything
            // else that decodes but misses the collection is the
            // missing-`symbols` case.
            Err(e) if e.is_syntax() => {
                tracing::error!("Binance exchangeInfo response is not valid JSON: {}", e);
                return Box::new(std::iter::empty());
            }
            Err(_) => {
                tracing::error!("There is no `symbols` at Binance exchangeInfo");
                return Box::new(std::iter::empty());
            }
        };
        tracing::info!("Binance total pairs: {}", info.symbols.len());

        Box::new(extract_records(info.symbols, only_traded))
    }
}
