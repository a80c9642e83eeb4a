//! `Cookie` header parsing and `Set-Cookie` serialization.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lifetime of every cookie issued by the server.
pub const COOKIE_LIFETIME_SECS: i64 = 3600;

/// RFC 1123 date layout used for the `Expires` attribute.
const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Cookies sent by a client, keyed by name, in the order they were sent.
pub type CookieMap = IndexMap<String, String>;

/// `SameSite` cookie policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SameSite {
    None,
    Lax,
    Strict,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policy = match self {
            SameSite::None => "None",
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
        };
        f.write_str(policy)
    }
}

/// An outbound cookie. `HttpOnly` is always emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieDirective {
    pub name: String,
    pub value: String,
    pub same_site: Option<SameSite>,
    pub secure: bool,
}

impl CookieDirective {
    /// Create a directive with no `SameSite` policy and without `Secure`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            same_site: None,
            secure: false,
        }
    }

    /// Set the `Secure` flag.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set the `SameSite` policy.
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }
}

/// Parse a raw `Cookie` header into a name → value map.
///
/// Segments are split on `;` and then on the first `=`. Blank segments are
/// skipped, a segment without `=` yields an empty value, and a repeated name
/// keeps its first position with the last value seen. An absent header
/// yields an empty map.
pub fn parse(header: Option<&str>) -> CookieMap {
    let mut cookies = CookieMap::new();

    for segment in header.unwrap_or_default().split(';') {
        if segment.trim().is_empty() {
            continue;
        }
        let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
        cookies.insert(name.trim().to_string(), value.trim().to_string());
    }

    cookies
}

/// Serialize a directive into a `Set-Cookie` header value expiring
/// [`COOKIE_LIFETIME_SECS`] from now.
pub fn serialize(directive: &CookieDirective) -> String {
    serialize_at(directive, Utc::now())
}

/// Serialize a directive as if the current time were `now`.
pub fn serialize_at(directive: &CookieDirective, now: DateTime<Utc>) -> String {
    let mut cookie = format!("{}={}; HttpOnly", directive.name, directive.value);

    if directive.secure {
        cookie.push_str("; Secure");
    }

    if let Some(same_site) = directive.same_site {
        cookie.push_str(&format!("; SameSite={}", same_site));
    }

    let expires = now + Duration::seconds(COOKIE_LIFETIME_SECS);
    cookie.push_str(&format!("; Expires={}", expires.format(EXPIRES_FORMAT)));

    cookie
}
