// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /ocr_process

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use ocr_gateway::api::http_server::AppState;
use ocr_gateway::auth::CredentialStore;
use ocr_gateway::vision::image_utils::DEFAULT_MAX_IMAGE_SIZE;
use ocr_gateway::vision::{ImagePipeline, OcrMethod};
use std::sync::Arc;

use crate::common::{
    app, body_json, issue_key, multipart_body, multipart_request, png_bytes, send, stub_state,
    BrokenRecognizer, SizeRecognizer,
};

/// App that accepts images of at most `max_image_bytes`
fn capped_state(max_image_bytes: usize) -> Arc<AppState> {
    let pipeline = ImagePipeline::empty(OcrMethod::Tesseract, max_image_bytes)
        .with_recognizer(Arc::new(SizeRecognizer(OcrMethod::Tesseract)));
    Arc::new(AppState::new(CredentialStore::new(), pipeline))
}

#[tokio::test]
async fn test_recognizes_uploaded_image() {
    let state = stub_state();
    let key = issue_key(&state, "alice").await;
    let png = png_bytes(8, 5);

    let body = multipart_body(&[("image", Some("page.png"), png.clone())]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["recognized_text"], "tesseract:8x5");
}

#[tokio::test]
async fn test_method_field_selects_engine() {
    let state = stub_state();
    let key = issue_key(&state, "alice").await;
    let png = png_bytes(3, 3);

    let body = multipart_body(&[
        ("method", None, b"ocrs".to_vec()),
        ("image", Some("page.png"), png.clone()),
    ]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["recognized_text"], "ocrs:3x3");
}

#[tokio::test]
async fn test_easyocr_name_selects_ocrs_engine() {
    let state = stub_state();
    let key = issue_key(&state, "alice").await;
    let png = png_bytes(6, 2);

    let body = multipart_body(&[
        ("image", Some("page.png"), png.clone()),
        ("method", None, b"easyocr".to_vec()),
    ]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["recognized_text"], "ocrs:6x2");
}

#[tokio::test]
async fn test_unsupported_method_is_bad_request() {
    let state = stub_state();
    let key = issue_key(&state, "alice").await;
    let png = png_bytes(3, 3);

    let body = multipart_body(&[
        ("image", Some("page.png"), png.clone()),
        ("method", None, b"paddle".to_vec()),
    ]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error_type"], "unsupported_method");
    assert!(body["error"].as_str().unwrap().contains("paddle"));
}

#[tokio::test]
async fn test_missing_api_key_is_unauthorized() {
    let state = stub_state();
    let png = png_bytes(3, 3);
    let body = multipart_body(&[("image", Some("page.png"), png.clone())]);

    let response = send(app(&state), multipart_request(body, None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "API key required");
}

#[tokio::test]
async fn test_wrong_api_key_is_forbidden() {
    let state = stub_state();
    issue_key(&state, "alice").await;
    let png = png_bytes(3, 3);
    let body = multipart_body(&[("image", Some("page.png"), png.clone())]);

    let response = send(
        app(&state),
        multipart_request(body, Some(("alice", "00000000000000000000000000000000"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Invalid API key");
}

#[tokio::test]
async fn test_key_of_another_user_is_forbidden() {
    let state = stub_state();
    let alice_key = issue_key(&state, "alice").await;
    issue_key(&state, "bob").await;
    let png = png_bytes(3, 3);
    let body = multipart_body(&[("image", Some("page.png"), png.clone())]);

    let response = send(app(&state), multipart_request(body, Some(("bob", alice_key.as_str())))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_image_is_bad_request() {
    let state = stub_state();
    let key = issue_key(&state, "alice").await;

    let body = multipart_body(&[("method", None, b"tesseract".to_vec())]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No image provided");
}

#[tokio::test]
async fn test_empty_image_part_is_missing_image() {
    let state = stub_state();
    let key = issue_key(&state, "alice").await;

    let body = multipart_body(&[("image", Some("empty.png"), Vec::new())]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error_type"], "missing_image");
}

#[tokio::test]
async fn test_non_multipart_body_is_missing_image() {
    let state = stub_state();
    let key = issue_key(&state, "alice").await;

    let request = Request::builder()
        .method("POST")
        .uri("/ocr_process")
        .header(header::CONTENT_TYPE, "application/json")
        .header("user_id", "alice")
        .header("api_key", key.as_str())
        .body(Body::from("{}"))
        .unwrap();

    let response = send(app(&state), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No image provided");
}

#[tokio::test]
async fn test_undecodable_image_is_server_error() {
    let state = stub_state();
    let key = issue_key(&state, "alice").await;

    let body = multipart_body(&[("image", Some("notes.txt"), b"plain text, not pixels".to_vec())]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error_type"], "image_decode_failed");
}

#[tokio::test]
async fn test_engine_failure_is_server_error() {
    let pipeline = ImagePipeline::empty(OcrMethod::Tesseract, DEFAULT_MAX_IMAGE_SIZE)
        .with_recognizer(Arc::new(BrokenRecognizer(OcrMethod::Tesseract)));
    let state = Arc::new(AppState::new(CredentialStore::new(), pipeline));
    let key = issue_key(&state, "alice").await;
    let png = png_bytes(4, 4);

    let body = multipart_body(&[("image", Some("page.png"), png.clone())]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("engine crashed"));
}

#[tokio::test]
async fn test_unloaded_engine_is_server_error() {
    let state = Arc::new(AppState::new_for_test());
    let key = issue_key(&state, "alice").await;
    let png = png_bytes(4, 4);

    let body = multipart_body(&[("image", Some("page.png"), png.clone())]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error_type"], "ocr_failed");
}

#[tokio::test]
async fn test_upload_over_body_limit_is_payload_too_large() {
    let state = capped_state(1024);
    let key = issue_key(&state, "alice").await;

    // Body limit is the image cap plus multipart overhead
    let body = multipart_body(&[("image", Some("huge.png"), vec![0u8; 200 * 1024])]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = body_json(response).await;
    assert_eq!(body["error_type"], "image_too_large");
    assert!(body["error"].as_str().unwrap().contains("too large"));
}

#[tokio::test]
async fn test_image_over_size_cap_is_payload_too_large() {
    let state = capped_state(1024);
    let key = issue_key(&state, "alice").await;

    let body = multipart_body(&[("image", Some("big.png"), vec![0u8; 4096])]);
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = body_json(response).await;
    assert_eq!(body["error_type"], "image_too_large");
    assert!(body["error"].as_str().unwrap().contains("4096"));
}

#[tokio::test]
async fn test_malformed_multipart_is_bad_request() {
    let state = stub_state();
    let key = issue_key(&state, "alice").await;

    // Opening boundary with no closing delimiter
    let body = format!(
        "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"a.png\"\r\n\r\npartial",
        crate::common::BOUNDARY
    )
    .into_bytes();
    let response = send(app(&state), multipart_request(body, Some(("alice", key.as_str())))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error_type"], "invalid_request");
}
