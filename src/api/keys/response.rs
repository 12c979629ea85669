// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response from POST /generate_api_key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateApiKeyResponse {
    pub api_key: String,
}
