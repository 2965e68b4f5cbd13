//! Monitor types

use crate::config::MonitorConfig;
use crate::feed::TradingPair;
use crate::signal::SpreadObservation;
use rust_decimal::Decimal;
use std::fmt;
use std::time::Duration;

/// Runtime settings for a [`super::SpreadMonitor`]
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    /// Pair being monitored
    pub pair: TradingPair,
    /// Quantity priced against the bid book
    pub quantity: Decimal,
    /// Ratio at or above which an alert is sent
    pub threshold: Decimal,
    /// Delay between polls
    pub interval: Duration,
    /// Minimum delay between alerts
    pub alert_cooldown: Duration,
}

impl From<&MonitorConfig> for MonitorSettings {
    fn from(config: &MonitorConfig) -> Self {
        Self {
            pair: config.pair(),
            quantity: config.quantity,
            threshold: config.diff_threshold,
            interval: config.interval(),
            alert_cooldown: config.alert_cooldown(),
        }
    }
}

/// Why a poll produced no observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Ask-side venue fetch failed
    TickerUnavailable,
    /// Bid-side venue fetch failed
    DepthUnavailable,
    /// Bid book had fewer than two levels
    ShallowBook,
    /// Ask price was zero or the spread overflowed
    UndefinedSpread,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::TickerUnavailable => "ticker unavailable",
            SkipReason::DepthUnavailable => "order book unavailable",
            SkipReason::ShallowBook => "fewer than two bid levels",
            SkipReason::UndefinedSpread => "spread undefined (zero ask or overflow)",
        };
        f.write_str(reason)
    }
}

/// Result of a single poll
#[derive(Debug, Clone)]
pub enum PollOutcome {
    /// No observation this round
    Skipped(SkipReason),
    /// Spread below threshold
    Observed(SpreadObservation),
    /// Spread at or above threshold, alert delivered
    Alerted(SpreadObservation),
    /// Spread at or above threshold, delivery failed
    AlertFailed(SpreadObservation),
    /// Spread at or above threshold, alert held back by the cooldown
    Suppressed(SpreadObservation),
}

impl PollOutcome {
    /// The observation, if the poll produced one
    pub fn observation(&self) -> Option<&SpreadObservation> {
        match self {
            PollOutcome::Skipped(_) => None,
            PollOutcome::Observed(obs)
            | PollOutcome::Alerted(obs)
            | PollOutcome::AlertFailed(obs)
            | PollOutcome::Suppressed(obs) => Some(obs),
        }
    }
}
