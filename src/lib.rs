//! Cookie demonstration server library.
//!
//! Serves one HTML page plus three small endpoints that read, set and clear
//! cookies, over plaintext HTTP and over TLS, with permissive CORS so the
//! page can be exercised from another origin.

pub mod config;
pub mod cookies;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use net::load_tls_config;
