//! Price feed module
//!
//! REST snapshots from the two venues being compared: Binance book ticker
//! (ask side) and Gate.io order book (bid side).

mod binance;
mod error;
mod gate;
mod http;
mod types;

pub use binance::{BinanceClient, BinanceConfig, BINANCE_API_URL};
pub use error::FeedError;
pub use gate::{GateClient, GateConfig, GATE_API_URL};
pub use http::build_http_client;
pub use types::{BookTicker, TradingPair};

use crate::orderbook::OrderBook;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Source of best bid/ask snapshots
#[async_trait]
pub trait TickerFeed: Send + Sync {
    /// Venue name used in logs and metric labels
    fn venue(&self) -> &'static str;
    /// Fetch the current book ticker for a pair
    async fn book_ticker(&self, pair: &TradingPair) -> Result<BookTicker, FeedError>;
}

/// Source of order book depth snapshots
#[async_trait]
pub trait DepthFeed: Send + Sync {
    /// Venue name used in logs and metric labels
    fn venue(&self) -> &'static str;
    /// Fetch the current order book for a pair
    async fn order_book(&self, pair: &TradingPair) -> Result<OrderBook, FeedError>;
}

fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, FeedError> {
    Decimal::from_str(value).map_err(|_| FeedError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
