//! Cross-origin response headers.
//!
//! Every origin is reflected back verbatim with credentials allowed. That is
//! what the demo page needs to exercise cross-site cookies, and it is NOT
//! suitable for a production deployment, which needs an origin allow-list.

use axum::http::{header, HeaderMap};

/// Add CORS headers to `response` derived from the request's headers.
///
/// Nothing is added unless the request carries an `Origin` header.
pub fn annotate(request: &HeaderMap, response: &mut HeaderMap) {
    let Some(origin) = request.get(header::ORIGIN) else {
        return;
    };

    response.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    response.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        header::HeaderValue::from_static("true"),
    );

    if let Some(requested) = request.get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
        response.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
    }
}
