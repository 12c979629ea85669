// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Parser;
use ocr_gateway::{
    api::{start_server, AppState},
    auth::CredentialStore,
    cli::Cli,
    config::ServiceConfig,
    version,
    vision::ImagePipeline,
};
use std::{env, sync::Arc};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cli.apply(ServiceConfig::from_env());
    config.validate().map_err(|e| anyhow!(e))?;
    let addr = config.socket_addr().map_err(|e| anyhow!(e))?;

    info!("🚀 Starting {}", version::get_version_string());
    info!(
        "Default engine: {}, max image size: {} bytes",
        config.default_method, config.max_image_bytes
    );

    let pipeline_config = config.pipeline_config();
    let pipeline = tokio::task::spawn_blocking(move || ImagePipeline::new(&pipeline_config)).await?;

    let state = Arc::new(AppState::new(CredentialStore::new(), pipeline));
    start_server(state, addr).await
}
