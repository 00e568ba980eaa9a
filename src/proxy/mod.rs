//! The proxy router and its handlers.
//!
//! [`proxy_handler`] is the Axum fallback that receives every request.
//! CORS preflights are answered locally; everything else is dispatched
//! through [`routing::ProxyRoute`] to one of the forwarders ([`api`],
//! [`image`], [`autocomplete`]) or the static [`landing`] page. The CORS
//! header set itself is overlaid by [`crate::middleware::cors`], so every
//! response carries it, including ones produced by tower layers.

pub mod api;
pub mod autocomplete;
pub mod headers;
pub mod image;
pub mod landing;
pub mod routing;
pub mod upstream;

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;

use crate::server::AppState;
use routing::ProxyRoute;

pub async fn proxy_handler(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let method = parts.method;
    let uri = parts.uri;
    let req_headers = parts.headers;
    let path = uri.path();
    let correlation_id = req_headers
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);

    if method == Method::OPTIONS {
        tracing::debug!(
            correlation_id = %correlation_id,
            path = %path,
            "preflight answered"
        );
        return StatusCode::OK.into_response();
    }

    let route = ProxyRoute::from_path(path);

    tracing::info!(
        correlation_id = %correlation_id,
        method = %method,
        path = %path,
        route = route.as_str(),
        "request received"
    );

    match route {
        ProxyRoute::Api => {
            let body = match read_body(body, state.max_body).await {
                Ok(body) => body,
                Err(response) => return response,
            };
            api::forward(
                &state,
                method,
                uri.query(),
                &req_headers,
                body,
                &correlation_id,
            )
            .await
        }
        ProxyRoute::Image => {
            let image_url = query_param(uri.query(), "url");
            image::forward(&state, image_url.as_deref(), &correlation_id).await
        }
        ProxyRoute::Autocomplete => {
            let text = query_param(uri.query(), "q");
            autocomplete::forward(&state, text.as_deref(), &correlation_id).await
        }
        ProxyRoute::Landing => landing::response(),
    }
}

/// Collect a request body of at most `limit` bytes. Only `/api` forwards
/// a body, so the others never read it.
async fn read_body(body: Body, limit: usize) -> Result<axum::body::Bytes, Response> {
    axum::body::to_bytes(body, limit).await.map_err(|e| {
        if e.into_inner().is::<LengthLimitError>() {
            upstream::plain_text(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Request body exceeds {limit} bytes"),
            )
        } else {
            upstream::plain_text(
                StatusCode::BAD_REQUEST,
                "Failed to read the request body".to_string(),
            )
        }
    })
}

/// First value of `name` in a form-urlencoded query, percent-decoded.
#[must_use]
pub fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
