//! Logical origin of a request.
//!
//! HTTP/2 carries the scheme and authority as pseudo-headers, which hyper
//! exposes through the request URI. HTTP/1 requests only carry `Host`, so
//! they are always reported as `http://`, even when they arrived over TLS.

use axum::http::{header, HeaderMap, Uri, Version};

/// Resolve `<scheme>://<authority>` for a request.
pub fn resolve(version: Version, uri: &Uri, headers: &HeaderMap) -> String {
    if version == Version::HTTP_2 {
        let scheme = uri.scheme_str().unwrap_or("https");
        let authority = uri.authority().map(|a| a.as_str()).unwrap_or_default();
        return format!("{}://{}", scheme, authority);
    }

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    format!("http://{}", host)
}
