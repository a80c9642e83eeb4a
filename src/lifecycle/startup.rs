//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Check the index template and TLS credentials before binding anything
//! - Bind listeners and serve until a termination signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last (traffic only when ready)

use std::net::SocketAddr;
use std::path::PathBuf;

use tokio::net::TcpListener;

use crate::config::{validate_config, ServerConfig, ValidationError};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::net::{load_tls_config, TlsError};

/// Errors that stop the server from starting, or stop it while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    Config(Vec<ValidationError>),
    #[error("index template {path:?} is not readable: {source}")]
    MissingAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Tls(#[from] TlsError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start both listeners and serve until SIGINT/SIGTERM.
pub async fn start(config: ServerConfig) -> Result<(), StartupError> {
    validate_config(&config).map_err(StartupError::Config)?;

    let index_path = &config.assets.index_path;
    tokio::fs::metadata(index_path)
        .await
        .map_err(|source| StartupError::MissingAsset {
            path: index_path.clone(),
            source,
        })?;

    let tls = load_tls_config(&config.tls.cert_path, &config.tls.key_path).await?;
    tracing::info!(cert_path = ?config.tls.cert_path, "TLS credentials loaded");

    let http = bind(&config.listener.http_address).await?;
    let https: SocketAddr = config
        .listener
        .https_address
        .parse()
        .map_err(|e| StartupError::Bind {
            address: config.listener.https_address.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
        })?;

    let server = HttpServer::new(config);
    let shutdown = Shutdown::new();

    let run = server.run(http, https, tls, &shutdown);
    tokio::pin!(run);

    tokio::select! {
        result = &mut run => result.map_err(StartupError::Serve)?,
        _ = signals::shutdown_on_signal(&shutdown) => run.await.map_err(StartupError::Serve)?,
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn bind(address: &str) -> Result<TcpListener, StartupError> {
    TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.to_string(),
            source,
        })
}
