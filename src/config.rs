//! Configuration types for spread-watch

use crate::feed::{BinanceConfig, GateConfig, TradingPair, BINANCE_API_URL, GATE_API_URL};
use crate::notify::{DingTalkConfig, DINGTALK_API_URL};
use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub binance: BinanceVenueConfig,
    #[serde(default)]
    pub gate: GateVenueConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    pub telemetry: TelemetryConfig,
}

/// Spread monitor configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Base asset, e.g. "USUAL"
    pub base_asset: String,

    /// Quote asset, e.g. "USDT"
    #[serde(default = "default_quote_asset")]
    pub quote_asset: String,

    /// Quantity to price against the Gate bid book
    pub quantity: Decimal,

    /// Alert when (gate_estimate - binance_ask) / binance_ask >= this
    pub diff_threshold: Decimal,

    /// Seconds to wait between polls
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Minimum seconds between two alerts; 0 alerts on every qualifying poll
    #[serde(default)]
    pub alert_cooldown_secs: u64,
}

impl MonitorConfig {
    /// Trading pair built from the configured assets
    pub fn pair(&self) -> TradingPair {
        TradingPair::new(&self.base_asset, &self.quote_asset)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn alert_cooldown(&self) -> Duration {
        Duration::from_secs(self.alert_cooldown_secs)
    }
}

/// Outbound HTTP configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Proxy URL used by venues with `use_proxy = true`
    #[serde(default)]
    pub proxy: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Binance REST configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceVenueConfig {
    #[serde(default = "default_binance_url")]
    pub base_url: String,

    /// Route Binance requests through `http.proxy`
    #[serde(default = "default_true")]
    pub use_proxy: bool,
}

impl Default for BinanceVenueConfig {
    fn default() -> Self {
        Self {
            base_url: default_binance_url(),
            use_proxy: true,
        }
    }
}

/// Gate REST configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GateVenueConfig {
    #[serde(default = "default_gate_url")]
    pub base_url: String,

    /// Route Gate requests through `http.proxy`
    #[serde(default)]
    pub use_proxy: bool,

    /// Order book levels to request
    #[serde(default = "default_depth")]
    pub depth: u32,
}

impl Default for GateVenueConfig {
    fn default() -> Self {
        Self {
            base_url: default_gate_url(),
            use_proxy: false,
            depth: default_depth(),
        }
    }
}

/// Notification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// DingTalk robot token; alerts are only logged when absent
    #[serde(default)]
    pub dingtalk_token: Option<String>,

    /// DingTalk robot send endpoint
    #[serde(default = "default_dingtalk_url")]
    pub base_url: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            dingtalk_token: None,
            base_url: default_dingtalk_url(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Port for the Prometheus exporter; no exporter when absent
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_quote_asset() -> String {
    "USDT".to_string()
}
fn default_interval_secs() -> u64 {
    5
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_depth() -> u32 {
    10
}
fn default_dingtalk_url() -> String {
    DINGTALK_API_URL.to_string()
}
fn default_true() -> bool {
    true
}
fn default_binance_url() -> String {
    BINANCE_API_URL.to_string()
}
fn default_gate_url() -> String {
    GATE_API_URL.to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the monitor cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.monitor.base_asset.trim().is_empty(),
            "monitor.base_asset must not be empty"
        );
        anyhow::ensure!(
            self.monitor.quantity > Decimal::ZERO,
            "monitor.quantity must be positive, got {}",
            self.monitor.quantity
        );
        anyhow::ensure!(
            self.monitor.diff_threshold >= Decimal::ZERO,
            "monitor.diff_threshold must not be negative, got {}",
            self.monitor.diff_threshold
        );
        anyhow::ensure!(
            self.monitor.interval_secs > 0,
            "monitor.interval_secs must be positive"
        );
        anyhow::ensure!(self.http.timeout_secs > 0, "http.timeout_secs must be positive");
        anyhow::ensure!(self.gate.depth >= 2, "gate.depth must be at least 2");
        Ok(())
    }

    fn venue_proxy(&self, use_proxy: bool) -> Option<String> {
        if use_proxy {
            self.http.proxy.clone()
        } else {
            None
        }
    }

    /// Binance client configuration
    pub fn binance_client_config(&self) -> BinanceConfig {
        BinanceConfig {
            base_url: self.binance.base_url.clone(),
            timeout: self.http.timeout(),
            proxy: self.venue_proxy(self.binance.use_proxy),
        }
    }

    /// Gate client configuration
    pub fn gate_client_config(&self) -> GateConfig {
        GateConfig {
            base_url: self.gate.base_url.clone(),
            timeout: self.http.timeout(),
            proxy: self.venue_proxy(self.gate.use_proxy),
            depth: self.gate.depth,
        }
    }

    /// DingTalk configuration, if a token is set
    pub fn dingtalk_config(&self) -> Option<DingTalkConfig> {
        self.notify
            .dingtalk_token
            .as_ref()
            .filter(|token| !token.is_empty())
            .map(|token| DingTalkConfig {
                base_url: self.notify.base_url.clone(),
                access_token: token.clone(),
                timeout: self.http.timeout(),
            })
    }
}
