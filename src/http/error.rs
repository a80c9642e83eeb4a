//! Handler failures.

use std::path::PathBuf;
use std::time::Duration;

use axum::http::header::{HeaderName, InvalidHeaderValue};
use axum::response::Response;

use crate::http::body::BodyError;

/// Result of running a route handler.
pub type HandlerResult = Result<Response, HandlerError>;

/// Anything that stops a handler from producing its response.
///
/// The dispatcher turns every variant into a 500 response.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Body(#[from] BodyError),
    /// The request body did not match the expected JSON schema.
    #[error("invalid request payload: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to read asset {path:?}: {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode {name} header: {source}")]
    InvalidHeader {
        name: HeaderName,
        #[source]
        source: InvalidHeaderValue,
    },
    #[error("no response within {0:?}")]
    Timeout(Duration),
}
