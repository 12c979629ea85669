// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR endpoint handler

use axum::{
    extract::State,
    http::HeaderMap,
    Json,
};
use axum_extra::extract::{multipart::MultipartRejection, Multipart};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::request::OcrUpload;
use super::response::OcrProcessResponse;
use crate::api::auth::authorize;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /ocr_process - Extract text from an uploaded image
///
/// # Headers
/// - `user_id`, `api_key`: credentials from /generate_api_key
///
/// # Request (multipart/form-data)
/// - `image`: image file (required)
/// - `method`: OCR engine, `tesseract` or `ocrs` (optional)
///
/// # Response
/// - `recognized_text`: extracted text
///
/// # Errors
/// - 401 Unauthorized: missing `api_key` header
/// - 403 Forbidden: invalid credentials
/// - 400 Bad Request: missing image, unsupported method
/// - 500 Internal Server Error: decode or OCR failure
pub async fn ocr_process_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<OcrProcessResponse>, ApiError> {
    // 1. Authorize before touching the body
    let user_id = authorize(&state.credentials, &headers).await?;

    // 2. Read the upload
    let upload = match multipart {
        Ok(multipart) => OcrUpload::from_multipart(multipart).await?,
        Err(e) => {
            debug!("Request body is not multipart: {}", e);
            OcrUpload::default()
        }
    };
    let image = upload.image.ok_or(ApiError::MissingImage)?;
    let method = state.pipeline.resolve_method(upload.method.as_deref())?;

    // 3. Decode, preprocess, recognize off the async workers
    let started = Instant::now();
    let pipeline = state.pipeline.clone();
    let text = tokio::task::spawn_blocking(move || pipeline.process_image(&image, method)).await??;

    info!(
        "OCR complete for user {}: {} chars via {}, {}ms",
        user_id,
        text.len(),
        method,
        started.elapsed().as_millis()
    );

    Ok(Json(OcrProcessResponse {
        recognized_text: text,
    }))
}
