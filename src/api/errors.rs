// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use axum_extra::extract::multipart::MultipartError;
use thiserror::Error;

use crate::vision::{ImageError, OcrError, PipelineError};

/// JSON body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User ID required")]
    MissingUserId,

    #[error("API key required")]
    MissingApiKeyHeader,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("No image provided")]
    MissingImage,

    #[error("No image paths provided")]
    MissingPaths,

    #[error("Image too large: {0}")]
    ImageTooLarge(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    UnsupportedMethod(String),

    #[error("{0}")]
    Pipeline(PipelineError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::MissingUserId => "missing_user_id",
            ApiError::MissingApiKeyHeader => "missing_api_key",
            ApiError::InvalidApiKey => "invalid_api_key",
            ApiError::MissingImage => "missing_image",
            ApiError::MissingPaths => "missing_paths",
            ApiError::ImageTooLarge(_) => "image_too_large",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::UnsupportedMethod(_) => "unsupported_method",
            ApiError::Pipeline(PipelineError::BatchItem { .. }) => "batch_item_failed",
            ApiError::Pipeline(PipelineError::ImageDecode(_)) => "image_decode_failed",
            ApiError::Pipeline(PipelineError::Ocr(_)) => "ocr_failed",
            ApiError::Internal(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUserId
            | ApiError::MissingImage
            | ApiError::MissingPaths
            | ApiError::InvalidRequest(_)
            | ApiError::UnsupportedMethod(_) => StatusCode::BAD_REQUEST,
            ApiError::ImageTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MissingApiKeyHeader => StatusCode::UNAUTHORIZED,
            ApiError::InvalidApiKey => StatusCode::FORBIDDEN,
            ApiError::Pipeline(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            error_type: self.error_type().to_string(),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Ocr(OcrError::UnsupportedMethod(_)) => {
                ApiError::UnsupportedMethod(err.to_string())
            }
            PipelineError::ImageDecode(inner @ ImageError::TooLarge(..)) => {
                ApiError::ImageTooLarge(inner.to_string())
            }
            other => ApiError::Pipeline(other),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::ImageTooLarge("upload exceeds the request size limit".to_string())
        } else {
            ApiError::InvalidRequest(err.body_text())
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("OCR task failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status, self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status, self);
        }

        (status, Json(self.to_response())).into_response()
    }
}
