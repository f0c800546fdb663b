//! tests/global_errors/408.rs
//! Ensures that requests taking too long result in a 408 timeout.

#[path = "../mod.rs"]
mod common;

use std::time::Duration;

use algopark_api::config::{environment::EnvironmentVariables, state::AppState};
use algopark_api::core::server::with_global_layers;
use axum::{routing::get, Router};
use reqwest::StatusCode;
use tokio::time::timeout;

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let state: AppState = AppState::new(EnvironmentVariables {
        default_timeout_seconds: 1,
        ..EnvironmentVariables::default()
    });

    // A handler that outlives the one second server timeout
    let slow: Router<AppState> = Router::new().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "too late"
        }),
    );
    let base_url: String = common::spawn_router(with_global_layers(slow, state));

    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5), // client-side timeout duration
        reqwest::Client::new()
            .get(format!("{}/slow", base_url))
            .send()
    )
    .await;

    // Ensure the client did not timeout waiting for a response.
    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);
    assert!(resp.headers().contains_key("x-request-id"));
}
