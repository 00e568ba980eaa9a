//! Tower middleware layers.
//!
//! Holds [`cors`], the response mapper that stamps the CORS header set
//! onto every outgoing response. It sits outside the trace layer so
//! every response, whichever layer produced it, carries it.

use axum::response::Response;

use crate::proxy::headers::apply_cors;

pub async fn cors(mut response: Response) -> Response {
    apply_cors(response.headers_mut());
    response
}
