//! Spread monitor
//!
//! Fixed-interval sequential poll loop: Binance ask, Gate bids, sell
//! estimate, threshold check, notification.

mod runner;
mod types;

pub use runner::SpreadMonitor;
pub use types::{MonitorSettings, PollOutcome, SkipReason};
