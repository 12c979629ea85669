// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /health

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use ocr_gateway::api::http_server::AppState;
use std::sync::Arc;

use crate::common::{app, body_json, issue_key, send, stub_state};

fn health_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_engines_and_users() {
    let state = stub_state();
    issue_key(&state, "alice").await;
    issue_key(&state, "bob").await;

    let response = send(app(&state), health_request()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], ocr_gateway::version::VERSION);
    assert_eq!(body["registered_users"], 2);
    assert_eq!(
        body["features"],
        serde_json::json!(ocr_gateway::version::FEATURES)
    );

    let engines = body["engines"].as_array().unwrap();
    assert_eq!(engines.len(), 2);
    assert!(engines.iter().all(|e| e["available"] == true));
    let default: Vec<_> = engines.iter().filter(|e| e["default"] == true).collect();
    assert_eq!(default.len(), 1);
    assert_eq!(default[0]["name"], "tesseract");
}

#[tokio::test]
async fn test_health_degraded_without_default_engine() {
    let state = Arc::new(AppState::new_for_test());

    let body = body_json(send(app(&state), health_request()).await).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["registered_users"], 0);
}
