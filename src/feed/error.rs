//! Feed error types

use thiserror::Error;

/// Errors returned by venue REST clients
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Venue answered with a non-success status
    #[error("{venue} returned {status}: {body}")]
    Status {
        venue: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },
    /// Response body was not the expected JSON shape
    #[error("Failed to decode {venue} response: {source}")]
    Decode {
        venue: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// A numeric field could not be parsed as a decimal
    #[error("Invalid {field} value: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    /// Price was zero or negative
    #[error("Non-positive {field} for {symbol}: {value}")]
    InvalidPrice {
        symbol: String,
        field: &'static str,
        value: rust_decimal::Decimal,
    },
}
