// Global error handling for HTTP middleware layers

use std::any::Any;
use std::error::Error;
use axum::{
    BoxError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use tracing::error;

/// Maps errors raised by the middleware stack to HTTP status codes
pub async fn handle_global_error(err: BoxError) -> StatusCode {
    // 413 if the body was too large
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(&*err).is_some() {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    error!("Unhandled middleware error: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

/// Turns a handler panic into a bare 500 after logging it
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details: &str = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!(details, "Handler panicked");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// Empty 404, the same answer axum gives for an unmatched route
pub async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}
