// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod auth;
pub mod batch;
pub mod errors;
pub mod health;
pub mod http_server;
pub mod keys;
pub mod ocr;

pub use auth::{authorize, API_KEY_HEADER, USER_ID_HEADER};
pub use batch::{batch_process_handler, BatchProcessRequest, BatchProcessResponse};
pub use errors::{ApiError, ErrorResponse};
pub use health::{health_handler, HealthResponse};
pub use http_server::{create_app, start_server, AppState};
pub use keys::{generate_api_key_handler, GenerateApiKeyRequest, GenerateApiKeyResponse};
pub use ocr::{ocr_process_handler, OcrProcessResponse, OcrUpload};
