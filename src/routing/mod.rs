//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, target)
//!     → router.rs (method lookup, then exact target lookup)
//!     → Return: matched Route or NoMatch
//!
//! Route compilation (at startup):
//!     RouteTable::standard()
//!     → method → universal route | target → route map
//!     → frozen as immutable table shared by Arc
//! ```
//!
//! # Design Decisions
//! - Routes are enumerated variants, not string-keyed functions
//! - Exact match on the full request target, query included
//! - Explicit NoMatch rather than silent default

pub mod route;
pub mod router;

pub use route::Route;
pub use router::{MethodRoutes, RouteMatch, RouteTable};
