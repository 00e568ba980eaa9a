//! CORS overlay, request header forwarding, and hop-by-hop stripping.
//!
//! [`apply_cors`] inserts the fixed [`CORS_HEADERS`] set into a response
//! header map. [`build_forwarded_headers`] clones the caller's headers
//! for the API forward, strips hop-by-hop headers and `content-length`,
//! and rewrites `Host` to the upstream authority.

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::http::Uri;

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, HEAD, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type"),
];

static HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::TRANSFER_ENCODING,
    header::TE,
    header::TRAILER,
    header::UPGRADE,
    header::PROXY_AUTHORIZATION,
    header::PROXY_AUTHENTICATE,
];

/// Overlay the CORS header set. Existing values of the same names are
/// replaced; every other header is left alone.
pub fn apply_cors(headers: &mut HeaderMap) {
    for (name, value) in CORS_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
}

/// Strip hop-by-hop headers from an upstream response before it is
/// re-emitted. `content-length` is kept: the body is streamed unchanged.
pub fn strip_response_hop_by_hop(headers: &mut HeaderMap) {
    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
}

pub fn build_forwarded_headers(original: &HeaderMap, target: &Uri) -> HeaderMap {
    let mut headers = original.clone();

    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
    // The client recomputes this from the buffered body.
    headers.remove(header::CONTENT_LENGTH);

    match target
        .authority()
        .and_then(|authority| HeaderValue::from_str(authority.as_str()).ok())
    {
        Some(host) => {
            headers.insert(header::HOST, host);
        }
        None => {
            headers.remove(header::HOST);
        }
    }

    headers
}
