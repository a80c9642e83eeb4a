//! The fixed set of routes the server answers.

use std::fmt;

/// A route the dispatcher can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// CORS preflight, answers any target.
    Preflight,
    /// `GET /`: HTML page listing the cookies received.
    Index,
    /// `GET /get-cookies`: cookies received, as JSON.
    GetCookies,
    /// `POST /clear-cookies`: ask the browser to drop its cookies.
    ClearCookies,
    /// `POST /set-cookies`: issue cookies described in the request body.
    SetCookies,
}

impl Route {
    /// Every route, in table order.
    #[cfg(test)]
    pub(crate) const ALL: [Route; 5] = [
        Route::Preflight,
        Route::Index,
        Route::GetCookies,
        Route::ClearCookies,
        Route::SetCookies,
    ];

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Route::Preflight => "preflight",
            Route::Index => "index",
            Route::GetCookies => "get-cookies",
            Route::ClearCookies => "clear-cookies",
            Route::SetCookies => "set-cookies",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
