//! Route lookup.
//!
//! # Responsibilities
//! - Store the static route table
//! - Look up the route for a (method, target) pair
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) method lookup, O(1) exact target lookup via HashMap
//! - A method may own a universal route that ignores the target

use std::collections::HashMap;

use axum::http::Method;

use crate::routing::route::Route;

/// Routes registered for one method.
#[derive(Debug, Clone)]
pub enum MethodRoutes {
    /// One route for every target.
    Universal(Route),
    /// Exact target → route.
    Targets(HashMap<String, Route>),
}

/// Outcome of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Found(Route),
    NoMatch,
}

/// Static (method, target) → route table, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    methods: HashMap<Method, MethodRoutes>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The server's route table.
    pub fn standard() -> Self {
        Self::new()
            .universal(Method::OPTIONS, Route::Preflight)
            .target(Method::GET, "/", Route::Index)
            .target(Method::GET, "/get-cookies", Route::GetCookies)
            .target(Method::POST, "/clear-cookies", Route::ClearCookies)
            .target(Method::POST, "/set-cookies", Route::SetCookies)
    }

    /// Register `route` for every target of `method`, replacing any
    /// target-specific routes for it.
    pub fn universal(mut self, method: Method, route: Route) -> Self {
        self.methods.insert(method, MethodRoutes::Universal(route));
        self
    }

    /// Register `route` for the exact `target` under `method`.
    ///
    /// Ignored when `method` already has a universal route.
    pub fn target(mut self, method: Method, target: impl Into<String>, route: Route) -> Self {
        let entry = self
            .methods
            .entry(method)
            .or_insert_with(|| MethodRoutes::Targets(HashMap::new()));

        match entry {
            MethodRoutes::Targets(targets) => {
                targets.insert(target.into(), route);
            }
            MethodRoutes::Universal(existing) => {
                tracing::warn!(route = %route, universal = %existing, "Target route shadowed by universal route");
            }
        }
        self
    }

    /// Look up the route for `method` and the full request `target`.
    pub fn lookup(&self, method: &Method, target: &str) -> RouteMatch {
        match self.methods.get(method) {
            Some(MethodRoutes::Universal(route)) => RouteMatch::Found(*route),
            Some(MethodRoutes::Targets(targets)) => targets
                .get(target)
                .copied()
                .map_or(RouteMatch::NoMatch, RouteMatch::Found),
            None => RouteMatch::NoMatch,
        }
    }

    /// Number of (method, target) entries, counting universal routes once.
    pub(crate) fn len(&self) -> usize {
        self.methods
            .values()
            .map(|routes| match routes {
                MethodRoutes::Universal(_) => 1,
                MethodRoutes::Targets(targets) => targets.len(),
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_every_route() {
        let table = RouteTable::standard();
        assert_eq!(table.len(), Route::ALL.len());

        assert_eq!(table.lookup(&Method::GET, "/"), RouteMatch::Found(Route::Index));
        assert_eq!(table.lookup(&Method::GET, "/get-cookies"), RouteMatch::Found(Route::GetCookies));
        assert_eq!(table.lookup(&Method::POST, "/clear-cookies"), RouteMatch::Found(Route::ClearCookies));
        assert_eq!(table.lookup(&Method::POST, "/set-cookies"), RouteMatch::Found(Route::SetCookies));
    }

    #[test]
    fn preflight_matches_any_target() {
        let table = RouteTable::standard();
        for target in ["/", "/nope", "/set-cookies?x=1", "*"] {
            assert_eq!(table.lookup(&Method::OPTIONS, target), RouteMatch::Found(Route::Preflight));
        }
    }

    #[test]
    fn exact_target_only() {
        let table = RouteTable::standard();
        assert_eq!(table.lookup(&Method::GET, "/get-cookies/"), RouteMatch::NoMatch);
        assert_eq!(table.lookup(&Method::GET, "/get-cookies?fresh=1"), RouteMatch::NoMatch);
        assert_eq!(table.lookup(&Method::GET, "/GET-COOKIES"), RouteMatch::NoMatch);
    }

    #[test]
    fn wrong_method_or_unknown_method() {
        let table = RouteTable::standard();
        assert_eq!(table.lookup(&Method::POST, "/"), RouteMatch::NoMatch);
        assert_eq!(table.lookup(&Method::GET, "/set-cookies"), RouteMatch::NoMatch);
        assert_eq!(table.lookup(&Method::DELETE, "/nope"), RouteMatch::NoMatch);
    }

    #[test]
    fn universal_shadows_later_targets() {
        let table = RouteTable::new()
            .universal(Method::OPTIONS, Route::Preflight)
            .target(Method::OPTIONS, "/", Route::Index);
        assert_eq!(table.lookup(&Method::OPTIONS, "/"), RouteMatch::Found(Route::Preflight));
        assert_eq!(table.len(), 1);
        assert_eq!(RouteTable::new().len(), 0);
    }
}
