//! `/autocomplete` — forward search text to the upstream suggestion
//! endpoint. The upstream labels its JSON inconsistently, so the
//! outgoing content type is always `application/json`.

use axum::body::Bytes;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::Response;

use crate::server::AppState;

use super::upstream::{self, ForwardRequest};

pub const MISSING_QUERY: &str = "Error: The \"q\" query parameter is missing.";

pub async fn forward(state: &AppState, text: Option<&str>, correlation_id: &str) -> Response {
    let Some(text) = text else {
        return upstream::plain_text(StatusCode::BAD_REQUEST, MISSING_QUERY.to_string());
    };

    let target = upstream::autocomplete_url(&state.config, text);
    let request = ForwardRequest {
        client: &state.http_client,
        method: Method::GET,
        url: &target,
        headers: None,
        body: Bytes::new(),
        timeout_ms: state.config.timeout,
        correlation_id,
    };

    match upstream::send(request).await {
        Ok(response) => {
            let mut response = upstream::passthrough(response);
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            response
        }
        Err(e) => upstream::plain_text(
            StatusCode::BAD_GATEWAY,
            format!("Error fetching autocomplete suggestions: {e}"),
        ),
    }
}
