//! Binance REST book ticker client

use super::http::{build_http_client, fetch_json};
use super::{parse_decimal, BookTicker, FeedError, TickerFeed, TradingPair};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// Binance REST base URL
pub const BINANCE_API_URL: &str = "https://api1.binance.com";

const VENUE: &str = "binance";

/// Configuration for the Binance client
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    /// Base URL for the REST API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Proxy URL, if requests should go through one
    pub proxy: Option<String>,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            base_url: BINANCE_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            proxy: None,
        }
    }
}

/// Raw `/api/v3/ticker/bookTicker` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BinanceBookTicker {
    symbol: String,
    bid_price: String,
    bid_qty: String,
    ask_price: String,
    ask_qty: String,
}

/// Client for Binance spot book tickers
pub struct BinanceClient {
    config: BinanceConfig,
    client: Client,
}

impl BinanceClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, FeedError> {
        Self::with_config(BinanceConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: BinanceConfig) -> Result<Self, FeedError> {
        let client = build_http_client(config.timeout, config.proxy.as_deref())?;
        Ok(Self { config, client })
    }

    fn book_ticker_url(&self) -> String {
        format!(
            "{}/api/v3/ticker/bookTicker",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Convert the raw response, rejecting a non-positive ask
    fn parse_ticker(raw: BinanceBookTicker) -> Result<BookTicker, FeedError> {
        let ask_price = parse_decimal("askPrice", &raw.ask_price)?;
        if ask_price <= Decimal::ZERO {
            return Err(FeedError::InvalidPrice {
                symbol: raw.symbol,
                field: "askPrice",
                value: ask_price,
            });
        }

        Ok(BookTicker {
            bid_price: parse_decimal("bidPrice", &raw.bid_price)?,
            bid_qty: parse_decimal("bidQty", &raw.bid_qty)?,
            ask_price,
            ask_qty: parse_decimal("askQty", &raw.ask_qty)?,
            symbol: raw.symbol,
            timestamp: Utc::now(),
        })
    }
}

#[async_trait]
impl TickerFeed for BinanceClient {
    fn venue(&self) -> &'static str {
        VENUE
    }

    async fn book_ticker(&self, pair: &TradingPair) -> Result<BookTicker, FeedError> {
        let url = self.book_ticker_url();
        let symbol = pair.binance_symbol();

        tracing::debug!(url = %url, symbol = %symbol, "Fetching Binance book ticker");

        let request = self.client.get(&url).query(&[("symbol", symbol.as_str())]);
        let raw: BinanceBookTicker = fetch_json(VENUE, request).await?;

        Self::parse_ticker(raw)
    }
}
