//! Forward calls to the upstream and conversion of their responses.
//!
//! [`send`] issues one request through the pooled client, bounded by the
//! configured timeout, and logs the outcome. [`passthrough`] re-emits an
//! upstream response with its body streamed rather than collected.

use std::time::{Duration, Instant};

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use http_body_util::Full;
use hyper::body::Incoming;
use url::Url;

use crate::config::model::ProxyConfig;
use crate::error::ProxyError;
use crate::server::HttpClient;

use super::headers;

pub const MAX_REDIRECTS: usize = 5;

/// One outbound request, described by value so handlers can build it
/// without touching hyper types.
pub struct ForwardRequest<'a> {
    pub client: &'a HttpClient,
    pub method: Method,
    pub url: &'a str,
    pub headers: Option<&'a HeaderMap>,
    pub body: Bytes,
    pub timeout_ms: u64,
    pub correlation_id: &'a str,
}

/// Upstream URL for the index API: the configured path template with the
/// caller's query appended verbatim.
#[must_use]
pub fn api_url(config: &ProxyConfig, query: Option<&str>) -> String {
    let mut url = format!("{}{}", config.upstream_base(), config.api_path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push(if config.api_path.contains('?') { '&' } else { '?' });
        url.push_str(query);
    }
    url
}

/// Upstream URL for autocomplete, with the search text form-urlencoded.
#[must_use]
pub fn autocomplete_url(config: &ProxyConfig, text: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!(
        "{}{}?q={encoded}",
        config.upstream_base(),
        config.autocomplete_path
    )
}

/// Parse an absolute http(s) URL into a hyper [`Uri`].
///
/// `Url` only checks the target; the `Uri` is built from the original
/// text so the query reaches the upstream byte for byte. Text that is not
/// a valid request target as-is (e.g. a raw space) falls back to the
/// `Url` serialization.
pub fn parse_target(target: &str) -> Result<Uri, ProxyError> {
    let url = Url::parse(target).map_err(|e| ProxyError::UriParse {
        source: Box::new(e),
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ProxyError::UriParse {
            source: format!("unsupported scheme '{}'", url.scheme()).into(),
        });
    }
    target
        .parse::<Uri>()
        .or_else(|_| url.as_str().parse::<Uri>())
        .map_err(|e| ProxyError::UriParse {
            source: Box::new(e),
        })
}

/// Where a redirect response points, resolved against the URL that
/// produced it. `None` for anything that is not a followable redirect.
#[must_use]
pub fn redirect_target(current: &str, status: StatusCode, headers: &HeaderMap) -> Option<String> {
    if !matches!(status.as_u16(), 301 | 302 | 303 | 307 | 308) {
        return None;
    }
    let location = headers.get(header::LOCATION)?.to_str().ok()?;
    let next = Url::parse(current).ok()?.join(location).ok()?;
    Some(next.into())
}

/// GET `url`, following up to [`MAX_REDIRECTS`] redirects. Once the limit
/// is reached the last redirect response is returned as-is.
pub async fn get_following_redirects(
    client: &HttpClient,
    url: &str,
    timeout_ms: u64,
    correlation_id: &str,
) -> Result<hyper::Response<Incoming>, ProxyError> {
    let mut current = url.to_string();
    let mut hops = 0;

    loop {
        let response = send(ForwardRequest {
            client,
            method: Method::GET,
            url: &current,
            headers: None,
            body: Bytes::new(),
            timeout_ms,
            correlation_id,
        })
        .await?;

        if hops < MAX_REDIRECTS {
            if let Some(next) = redirect_target(&current, response.status(), response.headers()) {
                tracing::debug!(
                    correlation_id = %correlation_id,
                    from = %current,
                    to = %next,
                    "following redirect"
                );
                hops += 1;
                current = next;
                continue;
            }
        }
        return Ok(response);
    }
}

#[allow(clippy::cast_possible_truncation)]
pub async fn send(req: ForwardRequest<'_>) -> Result<hyper::Response<Incoming>, ProxyError> {
    let uri = parse_target(req.url)?;

    let mut builder = hyper::Request::builder()
        .method(req.method)
        .uri(uri.clone());
    if let Some(original) = req.headers {
        for (key, value) in &headers::build_forwarded_headers(original, &uri) {
            builder = builder.header(key, value);
        }
    }
    let request = builder
        .body(Full::new(req.body))
        .map_err(|e| ProxyError::Upstream {
            source: Box::new(e),
        })?;

    let start = Instant::now();
    let result = tokio::time::timeout(
        Duration::from_millis(req.timeout_ms),
        req.client.request(request),
    )
    .await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Ok(response)) => {
            tracing::info!(
                correlation_id = %req.correlation_id,
                target = %uri,
                status = response.status().as_u16(),
                latency_ms,
                "upstream responded"
            );
            Ok(response)
        }
        Ok(Err(e)) => {
            let message = error_chain(&e);
            tracing::warn!(
                correlation_id = %req.correlation_id,
                target = %uri,
                error = %message,
                latency_ms,
                "upstream request failed"
            );
            Err(ProxyError::Upstream {
                source: message.into(),
            })
        }
        Err(_) => {
            tracing::warn!(
                correlation_id = %req.correlation_id,
                target = %uri,
                latency_ms,
                "upstream request timed out"
            );
            Err(ProxyError::UpstreamTimeout(req.timeout_ms))
        }
    }
}

/// Re-emit an upstream response: same status and headers (minus
/// hop-by-hop), body streamed through.
#[must_use]
pub fn passthrough(response: hyper::Response<Incoming>) -> Response {
    let (mut parts, body) = response.into_parts();
    headers::strip_response_hop_by_hop(&mut parts.headers);
    Response::from_parts(parts, Body::new(body))
}

/// Plain-text response used for every locally generated error.
#[must_use]
pub fn plain_text(status: StatusCode, message: String) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        )],
        message,
    )
        .into_response()
}

/// Flatten an error and its sources into one line. The legacy client's
/// top-level message ("client error (Connect)") says little on its own.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
