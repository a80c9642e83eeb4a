//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use axum::body::Body;
use axum::http::Response;
use cookie_server::{load_tls_config, HttpServer, ServerConfig, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Template used by the tests; the placeholder sits between two markers.
pub const INDEX_TEMPLATE: &str = "<html><body>BEGIN {result} END</body></html>";

static NEXT_FILE: AtomicU32 = AtomicU32::new(0);

fn temp_file(suffix: &str) -> PathBuf {
    let n = NEXT_FILE.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("cookie-server-test-{}-{}{}", std::process::id(), n, suffix))
}

/// Write a fresh index template to a unique temp file.
pub fn write_index() -> PathBuf {
    let path = temp_file(".html");
    std::fs::write(&path, INDEX_TEMPLATE).unwrap();
    path
}

/// Write a self-signed certificate for `localhost` and its key as PEM files.
pub fn write_self_signed() -> (PathBuf, PathBuf) {
    let certified = rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
    let cert = temp_file("-cert.pem");
    let key = temp_file("-key.pem");
    std::fs::write(&cert, certified.cert.pem()).unwrap();
    std::fs::write(&key, certified.key_pair.serialize_pem()).unwrap();
    (cert, key)
}

/// Default config pointing at `index`.
pub fn config_with_index(index: PathBuf) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.assets.index_path = index;
    config
}

/// A server whose index template exists.
pub fn test_server() -> HttpServer {
    HttpServer::new(config_with_index(write_index()))
}

/// Collect a response body as a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Serve plaintext HTTP on an ephemeral local port.
pub async fn spawn_http(server: HttpServer, shutdown: &Shutdown) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = shutdown.clone();

    let handle = tokio::spawn(async move {
        server.serve_http(listener, &shutdown).await.unwrap();
    });

    (addr, handle)
}

/// Serve HTTPS with a fresh self-signed certificate on a free local port.
///
/// Returns once the listener accepts connections.
pub async fn spawn_https(server: HttpServer, shutdown: &Shutdown) -> (SocketAddr, JoinHandle<()>) {
    let (cert, key) = write_self_signed();
    let tls = load_tls_config(&cert, &key).await.unwrap();

    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let shutdown = shutdown.clone();

    let handle = tokio::spawn(async move {
        server.serve_https(addr, tls, &shutdown).await.unwrap();
    });

    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return (addr, handle);
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("HTTPS listener on {} never came up", addr);
}
