// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR response types

use serde::{Deserialize, Serialize};

/// Response from POST /ocr_process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrProcessResponse {
    /// Text extracted from the uploaded image
    pub recognized_text: String,
}
