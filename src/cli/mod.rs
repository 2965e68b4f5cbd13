//! CLI interface for spread-watch
//!
//! Provides subcommands for:
//! - `run`: Poll both venues until Ctrl-C
//! - `check`: Single poll, print the observation
//! - `estimate`: Offline sell price estimate from two bid levels
//! - `config`: Show configuration

mod check;
mod estimate;
mod run;

pub use check::CheckArgs;
pub use estimate::EstimateArgs;
pub use run::RunArgs;

use crate::config::Config;
use crate::feed::{BinanceClient, GateClient};
use crate::monitor::{MonitorSettings, SpreadMonitor};
use crate::notify::{DingTalkNotifier, LogNotifier, Notifier};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spread-watch")]
#[command(about = "Gate/Binance spread monitor with DingTalk alerts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll both venues until interrupted
    Run(RunArgs),
    /// Poll once and print the spread
    Check(CheckArgs),
    /// Estimate the sell price for two bid levels
    Estimate(EstimateArgs),
    /// Show configuration
    Config,
}

/// Wire the venue clients and notifier described by `config` into a monitor
pub fn build_monitor(config: &Config) -> anyhow::Result<SpreadMonitor> {
    let binance = BinanceClient::with_config(config.binance_client_config())?;
    let gate = GateClient::with_config(config.gate_client_config())?;

    let notifier: Box<dyn Notifier> = match config.dingtalk_config() {
        Some(dingtalk) => Box::new(DingTalkNotifier::new(dingtalk)?),
        None => {
            tracing::warn!("No DingTalk token configured, alerts will only be logged");
            Box::new(LogNotifier)
        }
    };

    Ok(SpreadMonitor::new(
        MonitorSettings::from(&config.monitor),
        Box::new(binance),
        Box::new(gate),
        notifier,
    ))
}

/// Print the effective configuration with the token masked
pub fn print_config(config: &Config) {
    let monitor = &config.monitor;
    println!("Current configuration:");
    println!("  Pair: {}", monitor.pair());
    println!("  Quantity: {}", monitor.quantity);
    println!("  Threshold: {}", monitor.diff_threshold);
    println!("  Interval: {}s", monitor.interval_secs);
    println!("  Alert cooldown: {}s", monitor.alert_cooldown_secs);
    println!(
        "  Proxy: {}",
        config.http.proxy.as_deref().unwrap_or("none")
    );
    println!(
        "  Binance: {} (proxy: {})",
        config.binance.base_url, config.binance.use_proxy
    );
    println!(
        "  Gate: {} (proxy: {}, depth: {})",
        config.gate.base_url, config.gate.use_proxy, config.gate.depth
    );
    println!(
        "  DingTalk: {}",
        config
            .dingtalk_config()
            .map(|c| mask_token(&c.access_token))
            .unwrap_or_else(|| "disabled".to_string())
    );
}

fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    format!("{visible}****")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("abcdef123456"), "abcd****");
        assert_eq!(mask_token("ab"), "ab****");
    }

    #[test]
    fn test_cli_parses_estimate() {
        let cli = Cli::try_parse_from([
            "spread-watch",
            "estimate",
            "--bid1",
            "100:5",
            "--bid2",
            "99:10",
            "--quantity",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.config, "config.toml");
        assert!(matches!(cli.command, Commands::Estimate(_)));
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::try_parse_from(["spread-watch", "--config", "/etc/sw.toml", "check"]).unwrap();
        assert_eq!(cli.config, "/etc/sw.toml");
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_build_monitor_from_example_config() {
        let config = Config::parse(include_str!("../../config.toml.example")).unwrap();
        let monitor = build_monitor(&config).unwrap();
        assert_eq!(monitor.settings().pair.gate_pair(), "USUAL_USDT");
    }
}
