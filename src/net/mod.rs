//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     cert.pem + key.pem
//!     → tls.rs (read PEM, check contents, build rustls config)
//!     → RustlsConfig handed to the TLS listener
//! ```
//!
//! # Design Decisions
//! - Credentials are read once; a bad pair is a startup failure
//! - ALPN advertises h2 and http/1.1 so HTTP/1 clients still connect over TLS

pub mod tls;

pub use tls::{load_tls_config, TlsError};
