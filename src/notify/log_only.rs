//! Log-only notifier, used when no webhook token is configured

use super::{Notifier, NotifyError};
use crate::signal::Alert;
use async_trait::async_trait;

/// Writes alerts to the log instead of sending them anywhere
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        tracing::info!(title = %alert.title, text = %alert.text, "Spread alert");
        Ok(())
    }
}
