//! Route handlers.
//!
//! Handlers only produce their own status, headers and body. CORS headers,
//! logging and failure responses belong to the dispatcher.

use std::path::Path;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::cookies::{self, CookieDirective, SameSite};
use crate::http::body;
use crate::http::error::{HandlerError, HandlerResult};
use crate::http::request::RequestContext;
use crate::routing::Route;

/// Placeholder in the index template replaced by the cookie listing.
pub const RESULT_PLACEHOLDER: &str = "{result}";

/// `Clear-Site-Data` response header.
pub static CLEAR_SITE_DATA: HeaderName = HeaderName::from_static("clear-site-data");

/// Body of `POST /set-cookies`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCookiesRequest {
    pub cookies_to_set: Vec<CookieDescriptor>,
}

/// One cookie the client wants issued.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieDescriptor {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub same_site: Option<SameSite>,
    #[serde(default)]
    pub secure: Option<bool>,
}

impl From<CookieDescriptor> for CookieDirective {
    fn from(descriptor: CookieDescriptor) -> Self {
        CookieDirective {
            name: descriptor.name,
            value: descriptor.value,
            same_site: descriptor.same_site,
            secure: descriptor.secure.unwrap_or(false),
        }
    }
}

/// Run `route` for one request.
pub async fn handle(route: Route, ctx: &RequestContext, body: Body, index_path: &Path) -> HandlerResult {
    match route {
        Route::Preflight => Ok(preflight()),
        Route::Index => index(ctx, index_path).await,
        Route::GetCookies => Ok(get_cookies(ctx)),
        Route::ClearCookies => Ok(clear_cookies()),
        Route::SetCookies => set_cookies(body).await,
    }
}

fn preflight() -> axum::response::Response {
    StatusCode::OK.into_response()
}

async fn index(ctx: &RequestContext, index_path: &Path) -> HandlerResult {
    let template = tokio::fs::read_to_string(index_path)
        .await
        .map_err(|source| HandlerError::Asset {
            path: index_path.to_path_buf(),
            source,
        })?;

    let cookies = serde_json::to_string_pretty(&ctx.cookies()).map_err(HandlerError::Encode)?;
    let result = format!("Cookies sent to {} <pre>{}</pre>", ctx.origin, cookies);
    let html = template.replacen(RESULT_PLACEHOLDER, &result, 1);

    Ok((
        StatusCode::OK,
        [
            (header::CACHE_CONTROL, "no-store"),
            (header::CONTENT_TYPE, "text/html"),
        ],
        html,
    )
        .into_response())
}

fn get_cookies(ctx: &RequestContext) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-store")],
        Json(ctx.cookies()),
    )
        .into_response()
}

fn clear_cookies() -> axum::response::Response {
    (StatusCode::OK, [(CLEAR_SITE_DATA.clone(), "\"cookies\"")]).into_response()
}

async fn set_cookies(body: Body) -> HandlerResult {
    let payload = body::read_all(body).await?;
    let request: SetCookiesRequest = serde_json::from_str(&payload).map_err(HandlerError::Decode)?;

    let mut response = (StatusCode::OK, Json(json!({ "status": "OK" }))).into_response();
    for descriptor in request.cookies_to_set {
        let cookie = cookies::serialize(&descriptor.into());
        let value = HeaderValue::from_str(&cookie).map_err(|source| HandlerError::InvalidHeader {
            name: header::SET_COOKIE,
            source,
        })?;
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    Ok(response)
}
