//! OKEx Listing Adapter
//!
//! Fetches the spot instrument listing from OKEx's public v3 endpoint. The
//! response is a bare JSON array and carries no trading-status field, so
//! every syntactically valid item counts as tradeable regardless of the
//! `only_traded` flag.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::PairRecord;
use crate::ports::exchange::{PairIter, PairSource};

const PAIRS_ENDPOINT: &str = "/api/spot/v3/instruments";

/// OKEx adapter configuration
#[derive(Debug, Clone)]
pub struct OkexConfig {
    /// Base URL for the public REST API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for OkexConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.okex.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// OKEx pair-listing client
#[derive(Debug, Clone)]
pub struct OkexSource {
    config: OkexConfig,
    http: Client,
}

impl OkexSource {
    /// Create a new client with the default configuration
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(OkexConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: OkexConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }
}

/// One instrument item; optional fields so one malformed item can be
/// skipped without failing the whole decode.
#[derive(Debug, Deserialize)]
struct RawInstrument {
    #[serde(default)]
    instrument_id: Option<String>,
    #[serde(default)]
    base_currency: Option<String>,
    #[serde(default)]
    quote_currency: Option<String>,
}

fn extract_records(instruments: Vec<RawInstrument>) -> impl Iterator<Item = PairRecord> {
    instruments.into_iter().filter_map(|raw| {
        match (raw.instrument_id, raw.base_currency, raw.quote_currency) {
            (Some(symbol), Some(base), Some(quote)) => Some(PairRecord::new(symbol, base, quote)),
            (instrument_id, _, _) => {
                tracing::error!(
                    "Missed one of mandatory fields: (`instrument_id`, `base_currency`, `quote_currency`). Bad pair: {:?}",
                    instrument_id
                );
                None
            }
        }
    })
}

#[async_trait]
impl PairSource for OkexSource {
    fn name(&self) -> &str {
        "okex"
    }

    async fn fetch_pairs(&self, _only_traded: bool) -> PairIter {
        let url = format!("{}{}", self.config.base_url, PAIRS_ENDPOINT);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Okex request {}. Transport error: {}", url, e);
                return Box::new(std::iter::empty());
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            tracing::error!(
                "Okex request {}. Response code: {}. Error: {}",
                url,
                status.as_u16(),
                body
            );
            return Box::new(std::iter::empty());
        }

        let instruments: Vec<RawInstrument> = match serde_json::from_str(&body) {
            Ok(instruments) => instruments,
            Err(_) => {
                tracing::error!("Okex instruments response is not a JSON array");
                return Box::new(std::iter::empty());
            }
        };
        tracing::info!("Okex total pairs: {}", instruments.len());

        Box::new(extract_records(instruments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Vec<RawInstrument> {
        serde_json::from_str(json).unwrap()
    }

    const FIXTURE: &str = r#"[
        {"instrument_id": "BTC-USDT", "base_currency": "BTC", "quote_currency": "USDT", "tick_size": "0.1"},
        {"instrument_id": "ETH-USDT", "base_currency": "ETH", "quote_currency": "USDT", "tick_size": "0.01"}
    ]"#;

    #[test]
    fn every_valid_item_is_emitted() {
        let records: Vec<_> = extract_records(decode(FIXTURE)).collect();
        assert_eq!(
            records,
            vec![
                PairRecord::new("BTC-USDT", "BTC", "USDT"),
                PairRecord::new("ETH-USDT", "ETH", "USDT"),
            ]
        );
    }

    #[test]
    fn item_missing_base_currency_is_skipped_siblings_survive() {
        let instruments = decode(
            r#"[
                {"instrument_id": "XRP-USDT", "quote_currency": "USDT"},
                {"instrument_id": "ETH-USDT", "base_currency": "ETH", "quote_currency": "USDT"}
            ]"#,
        );
        let records: Vec<_> = extract_records(instruments).collect();
        assert_eq!(records, vec![PairRecord::new("ETH-USDT", "ETH", "USDT")]);
    }

    #[test]
    fn non_array_response_fails_decode() {
        assert!(serde_json::from_str::<Vec<RawInstrument>>(r#"{"code": 50000}"#).is_err());
    }

    /// Serve one canned HTTP response on a local socket, returning the base
    /// URL to point the client at.
    async fn serve_once(response: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            use tokio::io::{AsyncReadExt, AsyncWriteExt};
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn server_error_response_yields_empty_sequence() {
        let base_url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\n\
             Content-Length: 21\r\n\
             Connection: close\r\n\
             \r\n\
             internal server error",
        )
        .await;

        let source = OkexSource::with_config(OkexConfig {
            base_url,
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        let records: Vec<_> = source.fetch_pairs(false).await.collect();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_empty_sequence() {
        let source = OkexSource::with_config(OkexConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        let records: Vec<_> = source.fetch_pairs(false).await.collect();
        assert!(records.is_empty());
    }
}
