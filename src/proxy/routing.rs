//! Path dispatch for incoming requests.
//!
//! [`ProxyRoute::from_path`] maps a request path onto one of the four
//! behaviours the proxy knows. Matching is exact: `/api/` and `/api/x`
//! are not `/api`. Anything unrecognized lands on
//! [`ProxyRoute::Landing`], so there is no "not found" outcome.

pub const API_PATH: &str = "/api";
pub const IMAGE_PATH: &str = "/image";
pub const AUTOCOMPLETE_PATH: &str = "/autocomplete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyRoute {
    /// Forward to the upstream index API with the caller's query.
    Api,
    /// Fetch the caller-supplied `url` and stream it back.
    Image,
    /// Forward the `q` search text to the upstream autocomplete endpoint.
    Autocomplete,
    /// Static HTML page describing the service. Catch-all.
    Landing,
}

impl ProxyRoute {
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path {
            API_PATH => Self::Api,
            IMAGE_PATH => Self::Image,
            AUTOCOMPLETE_PATH => Self::Autocomplete,
            _ => Self::Landing,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Image => "image",
            Self::Autocomplete => "autocomplete",
            Self::Landing => "landing",
        }
    }
}
