use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use netcafe_scout::config::Config;
use netcafe_scout::scout::Scout;

/// Find and scrape internet cafe pages around a train station.
#[derive(Parser)]
#[command(name = "netcafe-scout", version)]
struct Args {
    /// Train station name used to build the search query.
    station: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("netcafe_scout=info".parse()?),
        )
        .init();

    info!(station = args.station.as_str(), "Netcafe Scout starting...");

    let config = Config::from_env();

    let scout = Scout::new(&config);
    let stats = scout.run(&args.station).await?;
    info!("Scout run complete. {stats}");

    Ok(())
}
