//! Tracker HTTP server binary entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tracker::server::{CliArgs, ServerConfig, TrackerServer};
use tracker::{Config, SystemClock, create_store, load_config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();

    let config = if let Some(config_path) = &args.config {
        match load_config(config_path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {}", config_path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        tracing::info!("No configuration file provided, using defaults");
        Config::default()
    };

    tracing::info!("Opening store with config: {:?}", config.store);
    let store = create_store(&config.store).await.unwrap_or_else(|e| {
        tracing::error!("Failed to open store: {}", e);
        std::process::exit(1);
    });

    // Create and run the server
    let server = TrackerServer::new(store, Arc::new(SystemClock), ServerConfig::from(&args));
    server.run().await;
}
