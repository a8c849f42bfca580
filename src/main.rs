//! Timestamped Message Action Service
//!
//! Entry point for the action endpoint. Parses CLI args, initializes
//! logging, loads configuration, and serves the HTTP API until shutdown.

use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing::info;

use timestamped_message::{api, config};

/// Timestamped Message -- blockchain action endpoint
#[derive(Parser, Debug)]
#[command(
    name = "timestamped-message",
    version,
    about = "Serves a blockchain action that stores timestamped messages",
    long_about = "Serves a blockchain action descriptor and builds unsigned \
storeMessage transactions for wallet clients to sign and broadcast."
)]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Public base URL advertised in the action descriptor (overrides BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

// ---- Main Run ---------------------------------------------------------------

/// Load config, apply CLI overrides, and serve until a shutdown signal.
async fn run(cli: Cli) -> Result<()> {
    let mut config = config::load_config();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = Some(base_url);
    }

    info!(
        "Starting action service (port {}, base URL {})",
        config.port,
        config.base_url.as_deref().unwrap_or("request-derived"),
    );

    // Handle graceful shutdown
    let shutdown = async {
        let ctrl_c = signal::ctrl_c();
        #[cfg(unix)]
        {
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to register SIGTERM handler");

            tokio::select! {
                _ = ctrl_c => {
                    info!("Received SIGINT, shutting down...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down...");
                }
            }
        }
        #[cfg(not(unix))]
        {
            ctrl_c.await.expect("Failed to register Ctrl+C handler");
            info!("Received shutdown signal...");
        }
    };

    tokio::select! {
        _ = shutdown => {
            info!("Shutting down gracefully...");
            Ok(())
        }
        result = api::serve(config) => result,
    }
}

// ---- Entry Point -----------------------------------------------------------

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Fatal: {}", e);
        std::process::exit(1);
    }
}
