//! tests/global_errors/413.rs
//! Ensures that a create request with a body over the configured limit triggers 413.

#[path = "../mod.rs"]
mod common;

use algopark_api::config::environment::EnvironmentVariables;
use reqwest::StatusCode;
use serde_json::Value;

const LIMIT: usize = 1024;

fn small_limit() -> EnvironmentVariables {
    EnvironmentVariables {
        max_request_body_size: LIMIT,
        ..EnvironmentVariables::default()
    }
}

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let base_url: String = common::spawn_app_with(small_limit());

    let oversized_payload: Vec<u8> = vec![b'X'; LIMIT * 4];

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/items", base_url))
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn accepts_payload_at_the_limit() {
    let base_url: String = common::spawn_app_with(small_limit());

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/items", base_url))
        .body(vec![b'X'; LIMIT])
        .send()
        .await
        .expect("Failed to send request.");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(json["message"], "Item created");
}
