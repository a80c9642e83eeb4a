//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields)
//!     → TraceLayer spans per HTTP request
//!
//! Consumers:
//!     → logging.rs subscriber (stdout)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Request ID flows through every request log line

pub mod logging;
