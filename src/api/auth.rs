// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Header-based authorization for OCR endpoints

use axum::http::HeaderMap;
use tracing::debug;

use super::errors::ApiError;
use crate::auth::CredentialStore;

pub const USER_ID_HEADER: &str = "user_id";
pub const API_KEY_HEADER: &str = "api_key";

/// Check the `user_id` / `api_key` headers against the credential store
///
/// - no `api_key` header → `MissingApiKeyHeader` (401)
/// - missing `user_id`, unknown user or wrong key → `InvalidApiKey` (403)
///
/// Returns the authorized user id.
pub async fn authorize(store: &CredentialStore, headers: &HeaderMap) -> Result<String, ApiError> {
    let api_key = headers
        .get(API_KEY_HEADER)
        .ok_or(ApiError::MissingApiKeyHeader)?
        .to_str()
        .map_err(|_| ApiError::InvalidApiKey)?;

    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::InvalidApiKey)?;

    if !store.validate(user_id, api_key).await {
        return Err(ApiError::InvalidApiKey);
    }

    debug!("Authorized request for user {}", user_id);
    Ok(user_id.to_string())
}
