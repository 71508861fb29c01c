//! End-to-end tests for the streaming sum endpoint.

use calsum::config::ServerConfig;
use serde_json::Value;

mod common;

async fn post(url: &str, body: impl Into<reqwest::Body>) -> reqwest::Response {
    reqwest::Client::new()
        .post(url)
        .body(body)
        .send()
        .await
        .expect("Server unreachable")
}

#[tokio::test]
async fn sums_a_json_integer_range() {
    let server = common::start_server(ServerConfig::default()).await;
    let payload = serde_json::to_string(&(0..=100).collect::<Vec<i64>>()).unwrap();

    let response = post(&server.url(), payload).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total"], 5050);
    server.stop();
}

#[tokio::test]
async fn sums_a_range_past_thirty_two_bits() {
    let server = common::start_server(ServerConfig::default()).await;
    let payload = serde_json::to_string(&(0..=100_000).collect::<Vec<i64>>()).unwrap();

    let response = post(&server.url(), payload).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total"], 5_000_050_000_i64);
    server.stop();
}

#[tokio::test]
async fn accepts_indented_json() {
    let server = common::start_server(ServerConfig::default()).await;
    let payload = serde_json::to_string_pretty(&(0..=100_000).collect::<Vec<i64>>()).unwrap();

    let response = post(&server.url(), payload).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total"], 5_000_050_000_i64);
    server.stop();
}

#[tokio::test]
async fn accepts_handwritten_whitespace() {
    let server = common::start_server(ServerConfig::default()).await;

    let response = post(&server.url(), "[1, \r\n, 2 \r, 3 \t, \n4\n]").await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total"], 10);
    server.stop();
}

#[tokio::test]
async fn missing_closing_bracket_reports_total_with_warning() {
    let server = common::start_server(ServerConfig::default()).await;

    let response = post(&server.url(), "[1, \r\n, 2 \r, 3 \t, \n4\n").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total"], 10);
    assert_eq!(
        body["warning"],
        "input format must be a list of integers in json format, missing closing bracket"
    );
    server.stop();
}

#[tokio::test]
async fn non_numeric_token_reports_error_without_total() {
    let server = common::start_server(ServerConfig::default()).await;

    let response = post(&server.url(), "[1, \r\n, t2 \r, 3 \t, \n4\n").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["error"],
        "input format must be a list of integers in json format"
    );
    assert!(body.get("total").is_none());
    server.stop();
}

#[tokio::test]
async fn duplicate_opening_bracket_is_rejected() {
    let server = common::start_server(ServerConfig::default()).await;

    let response = post(&server.url(), "[1, [2]").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["error"],
        "input format must be a list of integers in json format"
    );
    server.stop();
}

#[tokio::test]
async fn closing_bracket_before_opening_is_rejected() {
    let server = common::start_server(ServerConfig::default()).await;

    let response = post(&server.url(), "]1, 2]").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body.get("total").is_none());
    server.stop();
}

#[tokio::test]
async fn chunked_stream_sums_like_a_whole_body() {
    let server = common::start_server(ServerConfig::default()).await;

    // One-byte chunks split every token across frames.
    let response = post(&server.url(), common::chunked_body("[12, 34, 56]", 1)).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total"], 102);
    server.stop();
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let mut config = ServerConfig::default();
    config.limits.max_body_bytes = 16;
    let server = common::start_server(config).await;

    let response = post(&server.url(), "[1, 2, 3, 4, 5, 6, 7, 8]").await;

    assert_eq!(response.status().as_u16(), 413);
    server.stop();
}
