//! Price feed types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A base/quote trading pair, formatted per venue on request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingPair {
    /// Base asset (e.g., "USUAL")
    pub base: String,
    /// Quote asset (e.g., "USDT")
    pub quote: String,
}

impl TradingPair {
    /// Create a new trading pair, upper-casing both assets
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into().to_uppercase(),
            quote: quote.into().to_uppercase(),
        }
    }

    /// Binance symbol format, e.g. "USUALUSDT"
    pub fn binance_symbol(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }

    /// Gate currency pair format, e.g. "USUAL_USDT"
    pub fn gate_pair(&self) -> String {
        format!("{}_{}", self.base, self.quote)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// Best bid/ask snapshot from a book ticker endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookTicker {
    /// Venue symbol (e.g., "USUALUSDT")
    pub symbol: String,
    /// Best bid price
    pub bid_price: Decimal,
    /// Size at best bid
    pub bid_qty: Decimal,
    /// Best ask price
    pub ask_price: Decimal,
    /// Size at best ask
    pub ask_qty: Decimal,
    /// Local timestamp when the snapshot was received
    pub timestamp: DateTime<Utc>,
}
