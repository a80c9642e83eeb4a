//! Cookie demonstration server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser ──▶ :8080 plaintext ──┐
//!                                   ├──▶ axum Router ──▶ dispatch ──▶ route table
//!     Browser ──▶ :8443 TLS (h2) ───┘    (request id,                   │
//!                                         trace,                        ▼
//!                                         timeout)         handlers (index, get/set/clear
//!                                                           cookies, preflight)
//!                                                                        │
//!     Browser ◀── response + CORS headers ◀── finalize ◀─────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use cookie_server::config::{load_config, ServerConfig};
use cookie_server::lifecycle;
use cookie_server::observability::logging;

#[derive(Parser)]
#[command(name = "cookie-server")]
#[command(about = "Demo server that shows, sets and clears browser cookies", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    logging::init(&config.observability.log_level);

    tracing::info!("cookie-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?cli.config,
        http_address = %config.listener.http_address,
        https_address = %config.listener.https_address,
        index_path = ?config.assets.index_path,
        request_timeout_secs = ?config.timeouts.request_secs,
        "Configuration loaded"
    );

    if let Err(e) = lifecycle::start(config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
