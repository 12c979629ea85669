// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::vision::image_utils::DEFAULT_MAX_IMAGE_SIZE;
use crate::vision::{OcrMethod, PipelineConfig};

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_OCRS_MODEL_DIR: &str = "./models/ocrs";

/// Configuration for the OCR service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Engine used when a request does not name one
    pub default_method: OcrMethod,
    /// Tesseract language pack
    pub tesseract_language: String,
    /// Directory with ocrs `.rten` models
    pub ocrs_model_dir: PathBuf,
    /// Upper bound on upload and file size
    pub max_image_bytes: usize,
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            listen_addr: env::var("OCR_LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            default_method: env::var("OCR_DEFAULT_METHOD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_method),
            tesseract_language: env::var("TESSERACT_LANG").unwrap_or(defaults.tesseract_language),
            ocrs_model_dir: env::var("OCRS_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.ocrs_model_dir),
            max_image_bytes: env::var("OCR_MAX_IMAGE_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_image_bytes),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;
        if self.max_image_bytes == 0 {
            return Err("Max image size must be greater than 0".to_string());
        }
        if self.tesseract_language.trim().is_empty() {
            return Err("Tesseract language must not be empty".to_string());
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.listen_addr
            .parse()
            .map_err(|e| format!("Invalid listen address '{}': {}", self.listen_addr, e))
    }

    /// Engine settings for the image pipeline
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            default_method: self.default_method,
            tesseract_language: Some(self.tesseract_language.clone()),
            ocrs_model_dir: Some(self.ocrs_model_dir.clone()),
            max_image_bytes: self.max_image_bytes,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            default_method: OcrMethod::Tesseract,
            tesseract_language: "eng".to_string(),
            ocrs_model_dir: PathBuf::from(DEFAULT_OCRS_MODEL_DIR),
            max_image_bytes: DEFAULT_MAX_IMAGE_SIZE,
        }
    }
}
