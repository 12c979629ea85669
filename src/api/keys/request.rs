// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! API key issuance request

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request body for POST /generate_api_key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateApiKeyRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

impl GenerateApiKeyRequest {
    /// Return the user id, rejecting absent or empty values
    pub fn validate(&self) -> Result<&str, ApiError> {
        match self.user_id.as_deref() {
            Some(user_id) if !user_id.is_empty() => Ok(user_id),
            _ => Err(ApiError::MissingUserId),
        }
    }
}
