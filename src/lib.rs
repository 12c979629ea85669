// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod version;
pub mod vision;

pub use api::{create_app, start_server, ApiError, AppState};
pub use auth::{AuthError, CredentialStore};
pub use config::ServiceConfig;
pub use vision::{ImagePipeline, OcrMethod, PipelineConfig, PipelineError, TextRecognizer};
