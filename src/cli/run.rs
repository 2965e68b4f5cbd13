//! Run command implementation

use super::build_monitor;
use crate::config::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Stop after this many seconds instead of waiting for Ctrl-C
    #[arg(long)]
    pub duration_secs: Option<u64>,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut monitor = build_monitor(config)?;

        let duration = self.duration_secs.map(std::time::Duration::from_secs);
        let shutdown = async move {
            match duration {
                Some(limit) => {
                    tokio::select! {
                        _ = tokio::time::sleep(limit) => {}
                        _ = tokio::signal::ctrl_c() => {}
                    }
                }
                None => {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = %e, "Failed to listen for shutdown signal");
                        std::future::pending::<()>().await;
                    }
                }
            }
            tracing::info!("Received shutdown signal");
        };

        monitor.run_until(shutdown).await;
        Ok(())
    }
}
