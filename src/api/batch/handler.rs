// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Batch OCR endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::request::BatchProcessRequest;
use super::response::BatchProcessResponse;
use crate::api::auth::authorize;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /batch_process - Run OCR over a list of image files
///
/// Paths are read from the server's filesystem and processed one after
/// another. If any image fails to load or recognize, the whole request
/// fails and no results are returned.
///
/// # Headers
/// - `user_id`, `api_key`: credentials from /generate_api_key
///
/// # Request
/// - `image_paths`: non-empty list of file paths (required)
/// - `method`: OCR engine, `tesseract` or `ocrs` (optional)
///
/// # Response
/// - `batch_results`: recognized text, one entry per path, in input order
///
/// # Errors
/// - 401 Unauthorized: missing `api_key` header
/// - 403 Forbidden: invalid credentials
/// - 400 Bad Request: missing/empty `image_paths`, unsupported method, malformed JSON
/// - 500 Internal Server Error: any item failed
pub async fn batch_process_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<BatchProcessRequest>, JsonRejection>,
) -> Result<Json<BatchProcessResponse>, ApiError> {
    let user_id = authorize(&state.credentials, &headers).await?;

    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let paths = request.validate()?.to_vec();
    let method = state.pipeline.resolve_method(request.method.as_deref())?;

    let started = Instant::now();
    let count = paths.len();
    let pipeline = state.pipeline.clone();
    let batch_results =
        tokio::task::spawn_blocking(move || pipeline.process_batch(&paths, method)).await??;

    info!(
        "Batch OCR complete for user {}: {} images via {}, {}ms",
        user_id,
        count,
        method,
        started.elapsed().as_millis()
    );

    Ok(Json(BatchProcessResponse { batch_results }))
}
