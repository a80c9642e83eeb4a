//! Request identification and per-request context.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for tracing
//! - Extract everything the dispatcher and handlers need (method, target,
//!   headers, version, origin) into a read-only context
//!
//! # Design Decisions
//! - Request ID added as early as possible and echoed on the response
//! - The target is kept verbatim (path and query), routing matches on it
//! - Cookie headers split by HTTP/2 are rejoined before parsing

use axum::http::{header, request::Parts, HeaderMap, HeaderName, HeaderValue, Method, Request, Version};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::cookies::{self, CookieMap};
use crate::http::origin;

/// Header carrying the request ID.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates a fresh UUID v4 request ID for requests that lack one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Everything known about a request before its body is read.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    /// Path and query exactly as requested.
    pub target: String,
    pub version: Version,
    pub headers: HeaderMap,
    /// `<scheme>://<authority>` the request was addressed to.
    pub origin: String,
}

impl RequestContext {
    /// Build the context from request head parts.
    pub fn from_parts(parts: Parts) -> Self {
        let origin = origin::resolve(parts.version, &parts.uri, &parts.headers);
        let target = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());

        Self {
            method: parts.method,
            target,
            version: parts.version,
            headers: parts.headers,
            origin,
        }
    }

    /// The request ID stamped by the request-id layer, if any.
    pub fn request_id(&self) -> &str {
        self.headers
            .get(&X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }

    /// Cookies sent with the request.
    pub fn cookies(&self) -> CookieMap {
        let joined = self
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");

        if joined.is_empty() {
            cookies::parse(None)
        } else {
            cookies::parse(Some(&joined))
        }
    }
}
