//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP or TLS connection (8080 / 8443)
//!     → server.rs (Axum setup, request ID, trace, optional timeout)
//!     → dispatch.rs (single entry point, logging, finalize)
//!     → request.rs (context: method, target, headers, origin)
//!     → routing (static route table)
//!     → handlers.rs (cookies codec, body reader)
//!     → cors.rs (reflect Origin on every response)
//!     → Send to client
//! ```

pub mod body;
pub mod cors;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod origin;
pub mod request;
pub mod server;

pub use error::{HandlerError, HandlerResult};
pub use request::{MakeRequestUuid, RequestContext, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
