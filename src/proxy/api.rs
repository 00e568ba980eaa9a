//! `/api` — forward to the upstream index API.

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::Response;

use crate::server::AppState;

use super::upstream::{self, ForwardRequest};

pub async fn forward(
    state: &AppState,
    method: Method,
    query: Option<&str>,
    original_headers: &HeaderMap,
    body: Bytes,
    correlation_id: &str,
) -> Response {
    let target = upstream::api_url(&state.config, query);

    let request = ForwardRequest {
        client: &state.http_client,
        method,
        url: &target,
        headers: Some(original_headers),
        body,
        timeout_ms: state.config.timeout,
        correlation_id,
    };

    match upstream::send(request).await {
        Ok(response) => upstream::passthrough(response),
        Err(e) => upstream::plain_text(
            StatusCode::BAD_GATEWAY,
            format!("Error fetching from the API endpoint: {e}"),
        ),
    }
}
