//! Check command implementation

use super::build_monitor;
use crate::config::Config;
use crate::monitor::PollOutcome;
use crate::signal::SpreadObservation;
use clap::Args;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Send the alert if the threshold is met
    #[arg(long)]
    pub notify: bool,

    /// Print the observation as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut monitor = build_monitor(config)?;
        let threshold = monitor.settings().threshold;

        let obs = if self.notify {
            match monitor.poll_once().await {
                PollOutcome::Skipped(reason) => anyhow::bail!("Poll skipped: {reason}"),
                outcome => outcome
                    .observation()
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("Poll produced no observation"))?,
            }
        } else {
            monitor
                .observe()
                .await
                .map_err(|reason| anyhow::anyhow!("Poll skipped: {reason}"))?
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&obs)?);
        } else {
            print_observation(&obs, threshold);
        }
        Ok(())
    }
}

fn print_observation(obs: &SpreadObservation, threshold: rust_decimal::Decimal) {
    println!("Pair: {}", obs.pair);
    println!("  Binance ask 1: {}", obs.ask_price);
    println!(
        "  Gate bid 1: {} x {}",
        obs.best_bid.price, obs.best_bid.size
    );
    println!(
        "  Gate bid 2: {} x {}",
        obs.second_bid.price, obs.second_bid.size
    );
    println!(
        "  Gate estimate ({}): {} [{}]",
        obs.quantity, obs.estimate.price, obs.estimate.regime
    );
    println!("  Diff: {}", obs.diff);
    println!(
        "  Ratio: {} (threshold {}, {})",
        obs.ratio.round_dp(6),
        threshold,
        if obs.exceeds(threshold) { "ALERT" } else { "ok" }
    );
}
