//! Alert message formatting

use super::SpreadObservation;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A formatted alert ready for a notifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Short title
    pub title: String,
    /// Markdown body
    pub text: String,
}

impl Alert {
    /// Create an alert from raw title and markdown body
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Build the spread alert for an observation
    pub fn from_observation(obs: &SpreadObservation) -> Self {
        let base = &obs.pair.base;
        let diff = display(obs.diff);
        let gate = display(obs.estimate.price);
        let binance = display(obs.ask_price);

        let title =
            format!("Gate/Binance {base} spread {diff} = {gate} - {binance} above threshold");

        let text = format!(
            "### Gate/Binance {base} spread above threshold\n\
             - Spread: {diff} ({ratio}%)\n\
             - Gate sell estimate ({quantity} {base}, {regime}): {gate}\n\
             - Binance ask 1: {binance}\n\
             - Gate bid 1 / amount: {p1}, {q1}\n\
             - Gate bid 2 / amount: {p2}, {q2}",
            ratio = display((obs.ratio * dec!(100)).round_dp(2)),
            quantity = display(obs.quantity),
            regime = obs.estimate.regime,
            p1 = display(obs.best_bid.price),
            q1 = display(obs.best_bid.size),
            p2 = display(obs.second_bid.price),
            q2 = display(obs.second_bid.size),
        );

        Self { title, text }
    }
}

fn display(value: Decimal) -> Decimal {
    value.round_dp(8).normalize()
}
