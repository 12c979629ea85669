// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response from POST /batch_process
///
/// `batch_results[i]` is the text recognized from `image_paths[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchProcessResponse {
    pub batch_results: Vec<String>,
}
