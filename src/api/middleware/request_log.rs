// Start of file: /src/api/middleware/request_log.rs

/*
    * Access log middleware: tags every request with an id, runs the rest of the
    * stack inside a span carrying that id, and logs status and latency.
*/

use std::time::{Duration, Instant};
use axum::{
    extract::Request,
    http::{HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tracing::{info, info_span, warn, Instrument, Span};
use uuid::Uuid;

/// Header carrying the request id, in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

fn incoming_request_id(req: &Request) -> Option<String> {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}

pub async fn request_log_middleware(mut req: Request, next: Next) -> Response {
    let start: Instant = Instant::now();

    let request_id: String = incoming_request_id(&req)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let span: Span = info_span!("request", %method, %path, request_id = %request_id);
    let mut response: Response = next.run(req).instrument(span.clone()).await;

    let latency: Duration = start.elapsed();
    let status: u16 = response.status().as_u16();

    span.in_scope(|| {
        if response.status().is_server_error() {
            warn!(status, latency_ms = latency.as_millis() as u64, "Request failed");
        } else {
            info!(status, latency_ms = latency.as_millis() as u64, "Request completed");
        }
    });

    match HeaderValue::from_str(&request_id) {
        Ok(value) => {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(err) => warn!("Could not echo request id: {err}"),
    }

    response
}


// End of file: /src/api/middleware/request_log.rs
