//! Cross-venue spread observation
//!
//! Compares the price we would get selling `quantity` into the Gate bid
//! book against the Binance best ask:
//!
//!   diff  = gate_estimate - binance_ask
//!   ratio = diff / binance_ask

use crate::feed::TradingPair;
use crate::orderbook::PriceLevel;
use crate::pricing::{estimate_sell_price, SellEstimate};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One poll's worth of spread data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadObservation {
    /// Pair being monitored
    pub pair: TradingPair,
    /// Quantity the estimate was computed for
    pub quantity: Decimal,
    /// Binance best ask
    pub ask_price: Decimal,
    /// Gate best bid level
    pub best_bid: PriceLevel,
    /// Gate second-best bid level
    pub second_bid: PriceLevel,
    /// Gate sell estimate for `quantity`
    pub estimate: SellEstimate,
    /// estimate - ask
    pub diff: Decimal,
    /// diff / ask
    pub ratio: Decimal,
    /// When the observation was computed
    pub observed_at: DateTime<Utc>,
}

impl SpreadObservation {
    /// Compute the spread for one poll. Returns `None` if the ask is zero or
    /// the spread is not representable.
    pub fn compute(
        pair: TradingPair,
        ask_price: Decimal,
        best_bid: PriceLevel,
        second_bid: PriceLevel,
        quantity: Decimal,
    ) -> Option<Self> {
        let estimate = estimate_sell_price(&best_bid, &second_bid, quantity);
        let diff = estimate.price.checked_sub(ask_price)?;
        let ratio = diff.checked_div(ask_price)?;

        Some(Self {
            pair,
            quantity,
            ask_price,
            best_bid,
            second_bid,
            estimate,
            diff,
            ratio,
            observed_at: Utc::now(),
        })
    }

    /// Whether the ratio meets or exceeds `threshold`
    pub fn exceeds(&self, threshold: Decimal) -> bool {
        self.ratio >= threshold
    }
}
