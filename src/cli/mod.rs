// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;
use std::path::PathBuf;

use crate::config::ServiceConfig;
use crate::vision::OcrMethod;

/// OCR Gateway command line
///
/// Flags override the matching environment variables.
#[derive(Parser, Debug, Default)]
#[command(name = "ocr-gateway")]
#[command(version)]
#[command(about = "HTTP OCR service with per-user API keys", long_about = None)]
pub struct Cli {
    /// Address to listen on [env: OCR_LISTEN_ADDR]
    #[arg(long)]
    pub listen: Option<String>,

    /// Engine used when a request does not name one [env: OCR_DEFAULT_METHOD]
    #[arg(long)]
    pub method: Option<OcrMethod>,

    /// Tesseract language pack [env: TESSERACT_LANG]
    #[arg(long)]
    pub tesseract_lang: Option<String>,

    /// Directory with ocrs detection/recognition models [env: OCRS_MODEL_DIR]
    #[arg(long)]
    pub ocrs_model_dir: Option<PathBuf>,

    /// Largest accepted image in bytes [env: OCR_MAX_IMAGE_BYTES]
    #[arg(long)]
    pub max_image_bytes: Option<usize>,
}

impl Cli {
    /// Apply flags on top of `config`
    pub fn apply(self, mut config: ServiceConfig) -> ServiceConfig {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(method) = self.method {
            config.default_method = method;
        }
        if let Some(lang) = self.tesseract_lang {
            config.tesseract_language = lang;
        }
        if let Some(dir) = self.ocrs_model_dir {
            config.ocrs_model_dir = dir;
        }
        if let Some(max) = self.max_image_bytes {
            config.max_image_bytes = max;
        }
        config
    }
}
