// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Batch OCR request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request body for POST /batch_process
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchProcessRequest {
    /// Image file paths, processed in order
    #[serde(default)]
    pub image_paths: Option<Vec<String>>,

    /// OCR engine (defaults to the service default)
    #[serde(default)]
    pub method: Option<String>,
}

impl BatchProcessRequest {
    /// Return the paths, rejecting an absent or empty list
    pub fn validate(&self) -> Result<&[String], ApiError> {
        match self.image_paths.as_deref() {
            Some(paths) if !paths.is_empty() => Ok(paths),
            _ => Err(ApiError::MissingPaths),
        }
    }
}
