//! Gate.io REST spot order book client

use super::http::{build_http_client, fetch_json};
use super::{parse_decimal, DepthFeed, FeedError, TradingPair};
use crate::orderbook::{OrderBook, PriceLevel};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Gate.io REST base URL
pub const GATE_API_URL: &str = "https://api.gateio.ws";

const VENUE: &str = "gate";

/// Configuration for the Gate client
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Base URL for the REST API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Proxy URL, if requests should go through one
    pub proxy: Option<String>,
    /// Number of levels requested per side
    pub depth: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            base_url: GATE_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            proxy: None,
            depth: 10,
        }
    }
}

/// Raw `/api/v4/spot/order_book` response
///
/// Levels are `[price, amount]` string pairs, best first.
#[derive(Debug, Deserialize)]
struct GateOrderBook {
    /// Snapshot time in milliseconds
    #[serde(default)]
    current: Option<i64>,
    #[serde(default)]
    bids: Vec<(String, String)>,
    #[serde(default)]
    asks: Vec<(String, String)>,
}

/// Client for Gate.io spot order books
pub struct GateClient {
    config: GateConfig,
    client: Client,
}

impl GateClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, FeedError> {
        Self::with_config(GateConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: GateConfig) -> Result<Self, FeedError> {
        let client = build_http_client(config.timeout, config.proxy.as_deref())?;
        Ok(Self { config, client })
    }

    fn order_book_url(&self) -> String {
        format!(
            "{}/api/v4/spot/order_book",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn parse_levels(
        side: &'static str,
        levels: &[(String, String)],
    ) -> Result<Vec<PriceLevel>, FeedError> {
        levels
            .iter()
            .map(|(price, amount)| {
                Ok(PriceLevel {
                    price: parse_decimal(side, price)?,
                    size: parse_decimal(side, amount)?,
                })
            })
            .collect()
    }

    /// Convert the raw response into an order book snapshot
    fn parse_book(symbol: String, raw: GateOrderBook) -> Result<OrderBook, FeedError> {
        let updated_at = raw
            .current
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .unwrap_or_else(Utc::now);

        Ok(OrderBook {
            symbol,
            bids: Self::parse_levels("bids", &raw.bids)?,
            asks: Self::parse_levels("asks", &raw.asks)?,
            updated_at,
        })
    }
}

#[async_trait]
impl DepthFeed for GateClient {
    fn venue(&self) -> &'static str {
        VENUE
    }

    async fn order_book(&self, pair: &TradingPair) -> Result<OrderBook, FeedError> {
        let url = self.order_book_url();
        let currency_pair = pair.gate_pair();
        let limit = self.config.depth.to_string();

        tracing::debug!(url = %url, currency_pair = %currency_pair, "Fetching Gate order book");

        let request = self.client.get(&url).query(&[
            ("currency_pair", currency_pair.as_str()),
            ("limit", limit.as_str()),
        ]);
        let raw: GateOrderBook = fetch_json(VENUE, request).await?;

        Self::parse_book(currency_pair, raw)
    }
}
