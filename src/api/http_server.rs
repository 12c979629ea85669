// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::batch::batch_process_handler;
use super::health::health_handler;
use super::keys::generate_api_key_handler;
use super::ocr::ocr_process_handler;
use crate::auth::CredentialStore;
use crate::vision::{image_utils::DEFAULT_MAX_IMAGE_SIZE, ImagePipeline, OcrMethod};

/// Allowance for multipart framing on top of the image size cap
const BODY_LIMIT_OVERHEAD: usize = 64 * 1024;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialStore,
    pub pipeline: Arc<ImagePipeline>,
}

impl AppState {
    pub fn new(credentials: CredentialStore, pipeline: ImagePipeline) -> Self {
        Self {
            credentials,
            pipeline: Arc::new(pipeline),
        }
    }

    /// Empty credential store and a pipeline with no engines loaded
    pub fn new_for_test() -> Self {
        Self::new(
            CredentialStore::new(),
            ImagePipeline::empty(OcrMethod::Tesseract, DEFAULT_MAX_IMAGE_SIZE),
        )
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    let body_limit = state
        .pipeline
        .max_image_bytes()
        .saturating_add(BODY_LIMIT_OVERHEAD);

    Router::new()
        .route("/health", get(health_handler))
        .route("/generate_api_key", post(generate_api_key_handler))
        .route("/ocr_process", post(ocr_process_handler))
        .route("/batch_process", post(batch_process_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API until Ctrl-C
pub async fn start_server(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("OCR API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("OCR API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
