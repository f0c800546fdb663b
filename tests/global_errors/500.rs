//! tests/global_errors/500.rs
//! Ensures that a panicking handler maps to an HTTP 500 and the server keeps serving.

#[path = "../mod.rs"]
mod common;

use algopark_api::api::api_routes;
use algopark_api::config::{environment::EnvironmentVariables, state::AppState};
use algopark_api::core::server::with_global_layers;
use axum::{routing::get, Router};
use reqwest::StatusCode;

#[tokio::test]
async fn returns_500_on_handler_panic() {
    let state: AppState = AppState::new(EnvironmentVariables::default());

    let routes: Router<AppState> = Router::new()
        .route("/panic", get(|| async {
            if true {
                panic!("deliberate test panic");
            }
            "unreachable"
        }))
        .merge(api_routes(state.clone()));
    let base_url: String = common::spawn_router(with_global_layers(routes, state));
    let client: reqwest::Client = reqwest::Client::new();

    let resp: reqwest::Response = client
        .get(format!("{}/panic", base_url))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The panic is contained to that request
    let resp: reqwest::Response = client
        .get(format!("{}/api/items", base_url))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::OK);
}
