//! Notification module
//!
//! Delivers spread alerts. Delivery is fire-and-forget: callers log the
//! error and move on, nothing is retried.

mod dingtalk;
mod log_only;

pub use dingtalk::{DingTalkConfig, DingTalkNotifier, DINGTALK_API_URL};
pub use log_only::LogNotifier;

use crate::signal::Alert;
use async_trait::async_trait;
use thiserror::Error;

/// Notification delivery errors
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Endpoint answered with a non-success status
    #[error("Notification endpoint returned {0}")]
    Status(reqwest::StatusCode),
    /// Endpoint accepted the request but reported an error
    #[error("Notification rejected ({code}): {message}")]
    Rejected { code: i64, message: String },
}

/// Trait for alert delivery implementations
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name used in logs and metric labels
    fn name(&self) -> &'static str;
    /// Deliver an alert
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError>;
}
