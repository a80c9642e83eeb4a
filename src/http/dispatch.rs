//! Single entry point for every request on both listeners.
//!
//! ```text
//! Start → method lookup → target lookup → handler → finalize
//!                     \             \          \
//!                      → 404         → 404      → 500 (HandlerError)
//! ```
//!
//! A handler that outlives `timeouts.request_secs` counts as a failure.
//! Finalize applies CORS headers to whatever response was produced, so
//! misses, failures and timeouts carry them too. Each request yields exactly one
//! response value, which hyper terminates once written.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::cors;
use crate::http::error::{HandlerError, HandlerResult};
use crate::http::handlers;
use crate::http::request::RequestContext;
use crate::http::server::AppState;
use crate::routing::{Route, RouteMatch};

/// Route, run and finalize one request.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let ctx = RequestContext::from_parts(parts);

    tracing::info!(
        request_id = %ctx.request_id(),
        "{} {}{}",
        ctx.method,
        ctx.origin,
        ctx.target
    );

    let mut response = match state.routes.lookup(&ctx.method, &ctx.target) {
        RouteMatch::Found(route) => {
            tracing::debug!(request_id = %ctx.request_id(), route = %route, "Route matched");
            match run(&state, route, &ctx, body).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(
                        request_id = %ctx.request_id(),
                        route = %route,
                        error = %err,
                        "Handler failed"
                    );
                    failure(&ctx, &err)
                }
            }
        }
        RouteMatch::NoMatch => {
            tracing::warn!(request_id = %ctx.request_id(), method = %ctx.method, target = %ctx.target, "No route matched");
            not_found(&ctx)
        }
    };

    cors::annotate(&ctx.headers, response.headers_mut());
    response
}

/// Run the matched handler, bounded by the configured request timeout.
async fn run(state: &AppState, route: Route, ctx: &RequestContext, body: Body) -> HandlerResult {
    let handled = handlers::handle(route, ctx, body, &state.config.assets.index_path);

    match state.config.timeouts.request_timeout() {
        Some(limit) => tokio::time::timeout(limit, handled)
            .await
            .unwrap_or_else(|_| Err(HandlerError::Timeout(limit))),
        None => handled.await,
    }
}

fn not_found(ctx: &RequestContext) -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("No resource found for: {} {}", ctx.method, ctx.target),
    )
        .into_response()
}

fn failure(ctx: &RequestContext, err: &HandlerError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("Failed to process {} {}: {}", ctx.method, ctx.target, err),
    )
        .into_response()
}
