//! `/image` — fetch an arbitrary caller-supplied URL and stream it back.
//!
//! Two failure shapes are kept apart: an upstream that cannot be reached
//! is a 502, while an upstream that answers with a non-2xx status has
//! that status propagated. Redirects are followed up to
//! [`upstream::MAX_REDIRECTS`] hops.

use axum::http::StatusCode;
use axum::response::Response;

use crate::server::AppState;

use super::upstream;

pub const MISSING_URL: &str = "Error: The \"url\" query parameter is missing.";

pub async fn forward(state: &AppState, image_url: Option<&str>, correlation_id: &str) -> Response {
    let Some(image_url) = image_url.filter(|u| !u.is_empty()) else {
        return upstream::plain_text(StatusCode::BAD_REQUEST, MISSING_URL.to_string());
    };

    let result = upstream::get_following_redirects(
        &state.http_client,
        image_url,
        state.config.timeout,
        correlation_id,
    )
    .await;

    match result {
        Ok(response) if response.status().is_success() => upstream::passthrough(response),
        Ok(response) => {
            let status = response.status();
            upstream::plain_text(
                status,
                format!("Failed to fetch the image. Status: {}", status.as_u16()),
            )
        }
        Err(e) => upstream::plain_text(
            StatusCode::BAD_GATEWAY,
            format!("Error fetching the image file: {e}"),
        ),
    }
}
