//! spread-watch: Gate/Binance spread monitor with DingTalk alerts
//!
//! This library provides the core components for:
//! - Partial-fill-aware sell price estimation over two bid levels
//! - REST snapshots from Binance (book ticker) and Gate.io (order book)
//! - Spread signal computation and alert formatting
//! - DingTalk robot notifications
//! - The fixed-interval poll loop
//! - Structured logging and Prometheus metrics

pub mod cli;
pub mod config;
pub mod feed;
pub mod monitor;
pub mod notify;
pub mod orderbook;
pub mod pricing;
pub mod signal;
pub mod telemetry;
