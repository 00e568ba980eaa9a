//! Serde data structures for the m3-proxy configuration file.
//!
//! [`ProxyConfig`] is the whole file: where the upstream lives, the
//! path templates for the API and autocomplete endpoints, and the
//! upstream timeout. Every field has a default so an empty file (or no
//! file at all) yields a working proxy.

use serde::{Deserialize, Serialize};

pub const DEFAULT_UPSTREAM: &str = "https://api.rule34.xxx";
pub const DEFAULT_API_PATH: &str = "/index.php?page=dapi&s=post&q=index";
pub const DEFAULT_AUTOCOMPLETE_PATH: &str = "/autocomplete.php";

fn default_upstream() -> String {
    DEFAULT_UPSTREAM.to_string()
}

fn default_api_path() -> String {
    DEFAULT_API_PATH.to_string()
}

fn default_autocomplete_path() -> String {
    DEFAULT_AUTOCOMPLETE_PATH.to_string()
}

const fn default_timeout() -> u64 {
    30_000
}

fn is_default_upstream(v: &str) -> bool {
    v == DEFAULT_UPSTREAM
}

fn is_default_api_path(v: &str) -> bool {
    v == DEFAULT_API_PATH
}

fn is_default_autocomplete_path(v: &str) -> bool {
    v == DEFAULT_AUTOCOMPLETE_PATH
}

fn is_default_timeout(v: &u64) -> bool {
    *v == default_timeout()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyConfig {
    /// Scheme and authority of the upstream, e.g. `https://api.example.com`.
    #[serde(
        default = "default_upstream",
        skip_serializing_if = "is_default_upstream"
    )]
    pub upstream: String,

    /// Path (and fixed query) of the index API. The caller's query is
    /// appended to it.
    #[serde(
        default = "default_api_path",
        skip_serializing_if = "is_default_api_path"
    )]
    pub api_path: String,

    #[serde(
        default = "default_autocomplete_path",
        skip_serializing_if = "is_default_autocomplete_path"
    )]
    pub autocomplete_path: String,

    /// Upstream timeout in milliseconds, measured until response headers
    /// arrive.
    #[serde(
        default = "default_timeout",
        skip_serializing_if = "is_default_timeout"
    )]
    pub timeout: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            upstream: default_upstream(),
            api_path: default_api_path(),
            autocomplete_path: default_autocomplete_path(),
            timeout: default_timeout(),
        }
    }
}

impl ProxyConfig {
    /// Upstream base with any trailing slash removed, ready for a path to be
    /// appended.
    #[must_use]
    pub fn upstream_base(&self) -> &str {
        self.upstream.trim_end_matches('/')
    }
}
