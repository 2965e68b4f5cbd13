//! Order book snapshot

use super::PriceLevel;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// L2 aggregated order book snapshot for a trading pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBook {
    /// Venue symbol (e.g. "USUAL_USDT")
    pub symbol: String,
    /// Bid levels, sorted best (highest) to worst
    pub bids: Vec<PriceLevel>,
    /// Ask levels, sorted best (lowest) to worst
    pub asks: Vec<PriceLevel>,
    /// Snapshot timestamp
    pub updated_at: DateTime<Utc>,
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bids: vec![],
            asks: vec![],
            updated_at: Utc::now(),
        }
    }

    /// Get best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|l| l.price)
    }

    /// Get best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|l| l.price)
    }

    /// Best and second-best bid levels, if the book has at least two
    pub fn top_two_bids(&self) -> Option<(PriceLevel, PriceLevel)> {
        match self.bids.as_slice() {
            [first, second, ..] => Some((*first, *second)),
            _ => None,
        }
    }
}
