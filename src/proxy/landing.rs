//! Static landing page served for every unrecognized path.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>M3 Proxy</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; line-height: 1.6; background-color: #f3f4f6; color: #111827; margin: 0; display: flex; justify-content: center; align-items: center; min-height: 100vh; }
        .container { max-width: 600px; background: #fff; padding: 2rem; border-radius: 0.75rem; box-shadow: 0 4px 6px -1px rgb(0 0 0 / 0.1); text-align: center; }
        h1 { font-size: 1.875rem; color: #1f2937; margin-bottom: 0.5rem; }
        p { color: #4b5563; }
        code { background-color: #e5e7eb; padding: 0.2rem 0.4rem; border-radius: 0.25rem; font-family: "Courier New", Courier, monospace; }
        ul { text-align: left; }
        .warning { color: #991b1b; background-color: #fef2f2; padding: 1rem; border-radius: 0.5rem; margin-top: 1.5rem; text-align: left; }
    </style>
</head>
<body>
    <div class="container">
        <h1>M3 Proxy</h1>
        <p>CORS-enabled pass-through to the upstream API.</p>
        <ul>
            <li><code>/api?tags=...</code> post index, query forwarded as-is</li>
            <li><code>/image?url=...</code> image download, streamed</li>
            <li><code>/autocomplete?q=...</code> tag suggestions as JSON</li>
        </ul>
        <div class="warning">
            <strong>Warning:</strong> the upstream allows about 60 requests per 60 seconds. Do not abuse it.
        </div>
    </div>
</body>
</html>
"#;

#[must_use]
pub const fn render() -> &'static str {
    LANDING_PAGE
}

#[must_use]
pub fn response() -> Response {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        )],
        render(),
    )
        .into_response()
}
