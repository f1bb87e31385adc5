use clap::Parser;
use maz_feed::cli::{Cli, Commands};
use maz_feed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _guard = maz_feed::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting feed service");
            args.execute(config).await?;
        }
        Commands::Compose(args) => {
            tracing::info!("Running one composition cycle");
            args.execute(config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Sources: {}", config.sources.base_url);
            println!(
                "  Refresh: every {}s",
                config.composer.refresh_interval_secs
            );
            let q = &config.composer.quotas;
            println!(
                "  Quotas: ads={} paid={} trades={} auctions={} ai={}",
                q.ads, q.paid_ads, q.live_trades, q.auctions, q.ai
            );
            println!(
                "  AI: {} ({})",
                if config.ai.api_key.is_some() {
                    "generative"
                } else {
                    "static fallback"
                },
                config.ai.model
            );
        }
    }

    Ok(())
}
