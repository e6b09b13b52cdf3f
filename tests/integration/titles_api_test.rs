// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::helpers::{origin_urls, spawn_origin, test_server};

const INVALID_PARAM_BODY: &str = "missing or invalid n_concurrent parameter";

/// 一个有效 URL 加一个 404 URL
#[tokio::test]
async fn partial_failure_is_counted_not_reported() {
    let origin = spawn_origin().await;
    let server = test_server(origin_urls(&origin, &["/test2", "/missing"]));

    let response = server
        .get("/extract-titles")
        .add_query_param("n_concurrent", 2)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), r#"{"titles":["test 2"],"successful":1,"failed":1}"#);
}

#[tokio::test]
async fn titles_are_normalized_and_sorted() {
    let origin = spawn_origin().await;
    let server = test_server(origin_urls(&origin, &["/test2", "/entities", "/test1"]));

    let response = server
        .get("/extract-titles")
        .add_query_param("n_concurrent", 3)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/json"
    );
    assert_eq!(
        response.json::<Value>(),
        json!({
            "titles": ["Fish & Chips", "test\n1", "test 2"],
            "successful": 3,
            "failed": 0
        })
    );
}

#[tokio::test]
async fn every_failure_kind_is_isolated() {
    let origin = spawn_origin().await;
    let mut urls = origin_urls(&origin, &["/slow", "/missing", "/plain", "/twice"]);
    urls.push("http://127.0.0.1:1/unreachable".to_string());
    urls.push("not a url".to_string());
    let server = test_server(urls);

    let response = server
        .get("/extract-titles")
        .add_query_param("n_concurrent", 4)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "titles": ["slow page"], "successful": 1, "failed": 5 })
    );
}

#[tokio::test]
async fn out_of_range_worker_counts_are_clamped() {
    let origin = spawn_origin().await;
    let urls = origin_urls(
        &origin,
        &["/test1", "/test2", "/entities", "/slow", "/missing", "/plain"],
    );
    let server = test_server(urls);

    for requested in ["100", "0", "-3", "4", "1"] {
        let response = server
            .get("/extract-titles")
            .add_query_param("n_concurrent", requested)
            .await;

        assert_eq!(response.status_code(), StatusCode::OK, "n_concurrent={}", requested);
        let body = response.json::<Value>();
        assert_eq!(body["successful"], 4);
        assert_eq!(body["failed"], 2);
        assert_eq!(
            body["titles"],
            json!(["Fish & Chips", "slow page", "test\n1", "test 2"])
        );
    }
}

#[tokio::test]
async fn empty_url_list_yields_empty_summary() {
    let server = test_server(Vec::new());

    let response = server
        .get("/extract-titles")
        .add_query_param("n_concurrent", 2)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), r#"{"titles":[],"successful":0,"failed":0}"#);
}

#[tokio::test]
async fn missing_parameter_is_bad_request() {
    let server = test_server(Vec::new());

    let response = server.get("/extract-titles").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), INVALID_PARAM_BODY);
}

#[tokio::test]
async fn non_integer_parameter_is_bad_request() {
    let server = test_server(Vec::new());

    for value in ["", "abc", "2.5", "1e3"] {
        let response = server
            .get("/extract-titles")
            .add_query_param("n_concurrent", value)
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "n_concurrent={:?}", value);
        assert_eq!(response.text(), INVALID_PARAM_BODY);
    }
}

#[tokio::test]
async fn non_get_methods_are_rejected() {
    let server = test_server(Vec::new());

    let responses = [
        server.post("/extract-titles").add_query_param("n_concurrent", 2).await,
        server.put("/extract-titles").add_query_param("n_concurrent", 2).await,
        server.patch("/extract-titles").add_query_param("n_concurrent", 2).await,
        server.delete("/extract-titles").add_query_param("n_concurrent", 2).await,
    ];

    for response in responses {
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.text().is_empty());
    }
}

#[tokio::test]
async fn repeated_requests_are_deterministic() {
    let origin = spawn_origin().await;
    let server = test_server(origin_urls(
        &origin,
        &["/slow", "/test2", "/entities", "/test1", "/missing"],
    ));

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let response = server
            .get("/extract-titles")
            .add_query_param("n_concurrent", 4)
            .await;
        bodies.push(response.text());
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}
