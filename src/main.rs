//! kitty: HTTP server with a pluggable router.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────────┐
//!                  │                      SERVER                      │
//!  Client Request  │  ┌──────────┐   ┌──────────────┐   ┌──────────┐  │
//!  ────────────────┼─▶│  axum    │──▶│ RouterService│──▶│  Router  │  │
//!                  │  │ serve +  │   │  (metrics)   │   │ (trait)  │  │
//!                  │  │ layers   │   └──────────────┘   └────┬─────┘  │
//!                  │  └──────────┘                           │        │
//!                  │                             ┌───────────▼──────┐ │
//!                  │                             │   BasicRouter    │ │
//!                  │                             │  method filter   │ │
//!                  │                             │   → ServeMux     │ │
//!                  │                             └───────────┬──────┘ │
//!  Client Response │                                         ▼        │
//!  ◀───────────────┼───────────────────────────────── handler / 404   │
//!                  └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use kitty::config::{load_config, KittyConfig};
use kitty::lifecycle::{configure_server, spawn_signal_handler, Shutdown};
use kitty::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "kitty")]
#[command(about = "HTTP server with a pluggable router", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => KittyConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("kitty v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        request_timeout_secs = config.timeouts.request_secs,
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

    let shutdown = Shutdown::new();
    spawn_signal_handler(shutdown.clone());

    let server = configure_server(config)?;
    server.bind_and_run(shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
