use clap::Parser;
use spread_watch::cli::{print_config, Cli, Commands};
use spread_watch::config::Config;
use spread_watch::telemetry::LogFormat;

fn load_config(path: &str) -> anyhow::Result<Config> {
    match Config::load(path) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", path, e);
            eprintln!("Using default configuration");
            Config::parse(include_str!("../config.toml.example"))
        }
    }
}

fn init(path: &str) -> anyhow::Result<Config> {
    let config = load_config(path)?;
    spread_watch::telemetry::init_telemetry(&config.telemetry)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = init(&cli.config)?;
            tracing::info!("Starting spread monitor");
            args.execute(&config).await?;
        }
        Commands::Check(args) => {
            let config = init(&cli.config)?;
            args.execute(&config).await?;
        }
        Commands::Estimate(args) => {
            // Offline, no config or network needed
            spread_watch::telemetry::init_logging("info", LogFormat::default())?;
            args.execute()?;
        }
        Commands::Config => {
            let config = load_config(&cli.config)?;
            print_config(&config);
        }
    }

    Ok(())
}
