//! Snap table simulator.
//!
//! Deals one game and lets a bot play it out, logging every action.
//! Settings come from `SNAP_*` environment variables (see [`config`]);
//! the final summary is printed to stdout as JSON.

use snap_core::GameStore;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod driver;
mod store;

use config::SimConfig;
use driver::Simulation;
use store::CacheStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SimConfig::from_env()?;
    info!("Starting Snap simulation for {} players...", config.players);

    let store = CacheStore::new();
    let summary = Simulation::new(config, store.clone()).run().await?;

    if let Some(game) = store.load() {
        debug!("Final table: {}", game.to_json()?);
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
