//! Poll loop implementation

use super::{MonitorSettings, PollOutcome, SkipReason};
use crate::feed::{DepthFeed, TickerFeed};
use crate::notify::Notifier;
use crate::signal::{Alert, SpreadObservation};
use crate::telemetry::{self, AlertOutcome};
use rust_decimal::prelude::ToPrimitive;
use std::future::Future;
use tokio::time::Instant;

/// Polls both venues and alerts when the spread crosses the threshold
pub struct SpreadMonitor {
    settings: MonitorSettings,
    ticker_feed: Box<dyn TickerFeed>,
    depth_feed: Box<dyn DepthFeed>,
    notifier: Box<dyn Notifier>,
    last_alert: Option<Instant>,
}

impl SpreadMonitor {
    /// Create a new monitor
    pub fn new(
        settings: MonitorSettings,
        ticker_feed: Box<dyn TickerFeed>,
        depth_feed: Box<dyn DepthFeed>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            settings,
            ticker_feed,
            depth_feed,
            notifier,
            last_alert: None,
        }
    }

    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }

    /// Fetch both venues and compute the spread, without alerting
    pub async fn observe(&self) -> Result<SpreadObservation, SkipReason> {
        let pair = &self.settings.pair;

        let venue = self.ticker_feed.venue();
        let started = Instant::now();
        let ticker = self.ticker_feed.book_ticker(pair).await;
        telemetry::record_fetch_latency(venue, started.elapsed());
        let ticker = ticker.map_err(|e| {
            telemetry::record_fetch_error(venue);
            tracing::error!(venue, pair = %pair, error = %e, "Failed to fetch book ticker");
            SkipReason::TickerUnavailable
        })?;

        let venue = self.depth_feed.venue();
        let started = Instant::now();
        let book = self.depth_feed.order_book(pair).await;
        telemetry::record_fetch_latency(venue, started.elapsed());
        let book = book.map_err(|e| {
            telemetry::record_fetch_error(venue);
            tracing::error!(venue, pair = %pair, error = %e, "Failed to fetch order book");
            SkipReason::DepthUnavailable
        })?;

        let (best, second) = book.top_two_bids().ok_or_else(|| {
            tracing::warn!(
                venue,
                symbol = %book.symbol,
                levels = book.bids.len(),
                "Order book has fewer than two bid levels"
            );
            SkipReason::ShallowBook
        })?;

        SpreadObservation::compute(
            pair.clone(),
            ticker.ask_price,
            best,
            second,
            self.settings.quantity,
        )
        .ok_or(SkipReason::UndefinedSpread)
    }

    /// Run one poll: observe, then alert if the threshold is met
    pub async fn poll_once(&mut self) -> PollOutcome {
        let obs = match self.observe().await {
            Ok(obs) => obs,
            Err(reason) => {
                tracing::debug!(%reason, "Poll skipped");
                return PollOutcome::Skipped(reason);
            }
        };

        telemetry::record_poll();
        if obs.estimate.is_degraded() {
            telemetry::record_insufficient_depth();
        }
        if let Some(ratio) = obs.ratio.to_f64() {
            telemetry::set_spread_ratio(ratio);
        }

        tracing::info!(
            pair = %obs.pair,
            gate = %obs.estimate.price,
            regime = %obs.estimate.regime,
            binance = %obs.ask_price,
            diff = %obs.diff,
            ratio = %obs.ratio,
            "Spread observed"
        );

        if !obs.exceeds(self.settings.threshold) {
            return PollOutcome::Observed(obs);
        }

        if self.in_cooldown() {
            telemetry::record_alert(AlertOutcome::Suppressed);
            tracing::debug!(ratio = %obs.ratio, "Alert suppressed by cooldown");
            return PollOutcome::Suppressed(obs);
        }

        let alert = Alert::from_observation(&obs);
        match self.notifier.notify(&alert).await {
            Ok(()) => {
                self.last_alert = Some(Instant::now());
                telemetry::record_alert(AlertOutcome::Sent);
                PollOutcome::Alerted(obs)
            }
            Err(e) => {
                telemetry::record_alert(AlertOutcome::Failed);
                tracing::error!(
                    notifier = self.notifier.name(),
                    error = %e,
                    "Failed to send notification"
                );
                PollOutcome::AlertFailed(obs)
            }
        }
    }

    fn in_cooldown(&self) -> bool {
        match self.last_alert {
            Some(at) => at.elapsed() < self.settings.alert_cooldown,
            None => false,
        }
    }

    /// Poll until `shutdown` resolves. Returns the number of polls run.
    pub async fn run_until<F>(&mut self, shutdown: F) -> u64
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        tracing::info!(
            pair = %self.settings.pair,
            quantity = %self.settings.quantity,
            threshold = %self.settings.threshold,
            interval_ms = self.settings.interval.as_millis() as u64,
            notifier = self.notifier.name(),
            "Starting spread monitor"
        );

        let mut polls = 0;
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = self.poll_once() => polls += 1,
            }

            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.settings.interval) => {}
            }
        }

        tracing::info!(polls, "Spread monitor stopped");
        polls
    }
}
