// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::http_server::AppState;
use crate::version;
use crate::vision::EngineInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub features: Vec<String>,
    pub engines: Vec<EngineStatus>,
    pub registered_users: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub name: String,
    pub available: bool,
    pub default: bool,
}

impl From<EngineInfo> for EngineStatus {
    fn from(info: EngineInfo) -> Self {
        Self {
            name: info.name,
            available: info.available,
            default: info.default,
        }
    }
}

/// GET /health - Service status and loaded OCR engines
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let engines: Vec<EngineStatus> = state
        .pipeline
        .list_engines()
        .into_iter()
        .map(EngineStatus::from)
        .collect();

    let status = if engines.iter().any(|e| e.default && e.available) {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: version::VERSION.to_string(),
        features: version::FEATURES.iter().map(|f| f.to_string()).collect(),
        engines,
        registered_users: state.credentials.count().await,
    })
}
