//! Gatekeeper proxy binary.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use gatekeeper_proxy::config::{load_config, load_default_config};
use gatekeeper_proxy::lifecycle::{wait_for_signal, Shutdown};
use gatekeeper_proxy::observability::{logging, metrics};
use gatekeeper_proxy::HttpServer;

/// Forwarding gate for a fixed chat-completion endpoint.
#[derive(Parser)]
#[command(name = "gatekeeper-proxy", version)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before logging so the configured level applies.
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => load_default_config()?,
    };

    logging::init_tracing(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
