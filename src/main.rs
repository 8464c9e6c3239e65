//! Trendify catalog API.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ http::server (trace, request id, CORS, timeout, limits)
//!                          │
//!                          ▼
//!                      http::products / categories / root
//!                          │ parse id, validate body (catalog::id, catalog::mapper)
//!                          ▼
//!                      catalog::repository ──▶ store::DocumentStore ──▶ MongoDB
//!                          │
//!     Client Response      ▼
//!     ◀─────────────── catalog::mapper (Document → Product JSON)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use trendify_api::config;
use trendify_api::lifecycle::{open_store, Shutdown};
use trendify_api::observability::{logging, metrics};
use trendify_api::HttpServer;

#[derive(Parser)]
#[command(name = "trendify-api")]
#[command(about = "Product catalog API for the Trendify storefront", long_about = None)]
struct Cli {
    /// Optional TOML configuration file. Environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!("trendify-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = ?config.database.backend,
        database = %config.database.database_name,
        origins = ?config.cors.allowed_origins,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = open_store(&config.database).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.listen_for_signals();

    let server = HttpServer::new(config, store.clone());
    let result = server.run(listener, server_shutdown).await;

    store.close().await;
    result?;

    tracing::info!("Shutdown complete");
    Ok(())
}
