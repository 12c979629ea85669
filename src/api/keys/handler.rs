// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! API key issuance handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

use super::request::GenerateApiKeyRequest;
use super::response::GenerateApiKeyResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /generate_api_key - Issue an API key for a user
///
/// Issuing again for the same user replaces the previous key.
///
/// # Request
/// - `user_id`: User identifier (required, non-empty)
///
/// # Response
/// - `api_key`: 32-character hex key
///
/// # Errors
/// - 400 Bad Request: missing or empty `user_id`, malformed JSON
pub async fn generate_api_key_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateApiKeyRequest>, JsonRejection>,
) -> Result<Json<GenerateApiKeyResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let user_id = request.validate()?;

    let api_key = state
        .credentials
        .issue(user_id)
        .await
        .map_err(|_| ApiError::MissingUserId)?;

    info!("🔑 Issued API key for user {}", user_id);
    Ok(Json(GenerateApiKeyResponse { api_key }))
}
