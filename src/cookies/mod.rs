//! Cookie subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound:
//!     Cookie request header
//!     → codec::parse (split, trim, best effort)
//!     → CookieMap (name → value, per request)
//!
//! Outbound:
//!     CookieDirective (client supplied, per request)
//!     → codec::serialize (HttpOnly, Secure, SameSite, Expires)
//!     → Set-Cookie response header
//! ```
//!
//! # Design Decisions
//! - Nothing is retained server-side; cookies live for one request
//! - Parsing never fails, malformed segments are tolerated
//! - Expiry is computed at serialization time, not at decode time

pub mod codec;

pub use codec::{parse, serialize, serialize_at, CookieDirective, CookieMap, SameSite, COOKIE_LIFETIME_SECS};
