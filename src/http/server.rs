//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the dispatcher as its only handler
//! - Wire up middleware (request ID, tracing)
//! - Serve the same router on the plaintext and TLS listeners
//! - Stop both listeners when shutdown is signalled

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::dispatch::dispatch;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::Shutdown;
use crate::routing::RouteTable;

/// How long the TLS listener waits for in-flight requests on shutdown.
const TLS_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Application state injected into the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub config: Arc<ServerConfig>,
}

/// HTTP server for the cookie demo.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let routes = RouteTable::standard();
        tracing::info!(
            routes = routes.len(),
            request_timeout = ?config.timeouts.request_timeout(),
            "Route table built"
        );

        let state = AppState {
            routes: Arc::new(routes),
            config: Arc::new(config),
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID.clone(), MakeRequestUuid))
    }

    /// The fully layered router, shared by both listeners.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve plaintext HTTP on `listener` until `shutdown` fires.
    pub async fn serve_http(
        &self,
        listener: TcpListener,
        shutdown: &Shutdown,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP listener starting");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!(address = %addr, "HTTP listener stopped");
        Ok(())
    }

    /// Serve HTTPS (h2 with HTTP/1.1 fallback) on `addr` until `shutdown` fires.
    pub async fn serve_https(
        &self,
        addr: SocketAddr,
        tls: RustlsConfig,
        shutdown: &Shutdown,
    ) -> Result<(), std::io::Error> {
        tracing::info!(address = %addr, "HTTPS listener starting");

        let handle = Handle::new();
        let drain = handle.clone();
        let stopped = shutdown.wait();
        tokio::spawn(async move {
            stopped.await;
            drain.graceful_shutdown(Some(TLS_DRAIN_TIMEOUT));
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(self.router().into_make_service())
            .await?;

        tracing::info!(address = %addr, "HTTPS listener stopped");
        Ok(())
    }

    /// Run both listeners until shutdown. Fails as soon as either fails.
    pub async fn run(
        self,
        http: TcpListener,
        https: SocketAddr,
        tls: RustlsConfig,
        shutdown: &Shutdown,
    ) -> Result<(), std::io::Error> {
        tokio::try_join!(
            self.serve_http(http, shutdown),
            self.serve_https(https, tls, shutdown),
        )?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
