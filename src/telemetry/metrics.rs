//! Prometheus metrics

use ::metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

const POLLS_TOTAL: &str = "spreadwatch_polls_total";
const FETCH_ERRORS_TOTAL: &str = "spreadwatch_fetch_errors_total";
const FETCH_LATENCY_MS: &str = "spreadwatch_fetch_latency_ms";
const ALERTS_TOTAL: &str = "spreadwatch_alerts_total";
const INSUFFICIENT_DEPTH_TOTAL: &str = "spreadwatch_insufficient_depth_total";
const SPREAD_RATIO: &str = "spreadwatch_spread_ratio";

/// Outcome label for alert delivery
#[derive(Debug, Clone, Copy)]
pub enum AlertOutcome {
    /// Notifier accepted the alert
    Sent,
    /// Notifier returned an error
    Failed,
    /// Skipped because of the alert cooldown
    Suppressed,
}

impl AlertOutcome {
    fn as_str(self) -> &'static str {
        match self {
            AlertOutcome::Sent => "sent",
            AlertOutcome::Failed => "failed",
            AlertOutcome::Suppressed => "suppressed",
        }
    }
}

/// Start the Prometheus exporter on `0.0.0.0:port` and register descriptions.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;

    describe_metrics();
    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

fn describe_metrics() {
    describe_counter!(POLLS_TOTAL, "Total number of completed polls");
    describe_counter!(FETCH_ERRORS_TOTAL, "Venue fetch failures by venue");
    describe_histogram!(FETCH_LATENCY_MS, "Venue fetch latency in milliseconds");
    describe_counter!(ALERTS_TOTAL, "Spread alerts by delivery outcome");
    describe_counter!(
        INSUFFICIENT_DEPTH_TOTAL,
        "Polls where the top two bids could not absorb the quantity"
    );
    describe_gauge!(SPREAD_RATIO, "Latest (estimate - ask) / ask ratio");
}

/// Record a completed poll
pub fn record_poll() {
    counter!(POLLS_TOTAL).increment(1);
}

/// Record a venue fetch failure
pub fn record_fetch_error(venue: &'static str) {
    counter!(FETCH_ERRORS_TOTAL, "venue" => venue).increment(1);
}

/// Record a venue fetch latency measurement
pub fn record_fetch_latency(venue: &'static str, duration: Duration) {
    histogram!(FETCH_LATENCY_MS, "venue" => venue).record(duration.as_secs_f64() * 1000.0);
}

/// Record an alert delivery outcome
pub fn record_alert(outcome: AlertOutcome) {
    counter!(ALERTS_TOTAL, "outcome" => outcome.as_str()).increment(1);
}

/// Record a degraded sell estimate
pub fn record_insufficient_depth() {
    counter!(INSUFFICIENT_DEPTH_TOTAL).increment(1);
}

/// Set the latest spread ratio
pub fn set_spread_ratio(ratio: f64) {
    gauge!(SPREAD_RATIO).set(ratio);
}
