// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image pipeline: decode, preprocess, recognize
//!
//! Holds the loaded OCR engines and runs images through them. Engines that
//! fail to load are skipped with a warning; requests that select them get
//! `OcrError::EngineUnavailable`.

use image::GrayImage;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::image_utils::{decode_image_bytes, load_image_path, ImageError, DEFAULT_MAX_IMAGE_SIZE};
use super::ocr::{OcrError, OcrMethod, OcrsRecognizer, TesseractRecognizer, TextRecognizer};
use super::preprocessing::preprocess;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Image decode failed: {0}")]
    ImageDecode(#[from] ImageError),

    #[error(transparent)]
    Ocr(#[from] OcrError),

    /// A batch item failed; the whole batch is abandoned
    #[error("Batch item {index} ({path}) failed: {source}")]
    BatchItem {
        index: usize,
        path: String,
        #[source]
        source: Box<PipelineError>,
    },
}

/// Configuration for loading OCR engines
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Engine used when a request does not name one
    pub default_method: OcrMethod,
    /// Tesseract language pack (None disables Tesseract)
    pub tesseract_language: Option<String>,
    /// Directory holding ocrs models (None disables ocrs)
    pub ocrs_model_dir: Option<PathBuf>,
    /// Upper bound on image size in bytes
    pub max_image_bytes: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_method: OcrMethod::Tesseract,
            tesseract_language: Some("eng".to_string()),
            ocrs_model_dir: Some(PathBuf::from("./models/ocrs")),
            max_image_bytes: DEFAULT_MAX_IMAGE_SIZE,
        }
    }
}

/// Information about an OCR engine
#[derive(Debug, Clone, Serialize)]
pub struct EngineInfo {
    pub name: String,
    pub available: bool,
    pub default: bool,
}

pub struct ImagePipeline {
    recognizers: HashMap<OcrMethod, Arc<dyn TextRecognizer>>,
    default_method: OcrMethod,
    max_image_bytes: usize,
}

impl ImagePipeline {
    /// Load every engine enabled in `config`
    pub fn new(config: &PipelineConfig) -> Self {
        let mut pipeline = Self::empty(config.default_method, config.max_image_bytes);

        if let Some(ref language) = config.tesseract_language {
            match TesseractRecognizer::new(language) {
                Ok(recognizer) => {
                    info!("✅ Tesseract engine loaded ({})", language);
                    pipeline.register(Arc::new(recognizer));
                }
                Err(e) => warn!("⚠️ Tesseract engine unavailable: {}", e),
            }
        }

        if let Some(ref dir) = config.ocrs_model_dir {
            match OcrsRecognizer::from_model_dir(dir) {
                Ok(recognizer) => {
                    info!("✅ ocrs engine loaded from {}", dir.display());
                    pipeline.register(Arc::new(recognizer));
                }
                Err(e) => warn!("⚠️ ocrs engine unavailable: {}", e),
            }
        }

        if !pipeline.has_engine(config.default_method) {
            warn!(
                "⚠️ Default OCR engine '{}' is not loaded; requests without a method will fail",
                config.default_method
            );
        }

        pipeline
    }

    /// Pipeline with no engines loaded
    pub fn empty(default_method: OcrMethod, max_image_bytes: usize) -> Self {
        Self {
            recognizers: HashMap::new(),
            default_method,
            max_image_bytes,
        }
    }

    /// Add (or replace) the engine for `recognizer.method()`
    pub fn with_recognizer(mut self, recognizer: Arc<dyn TextRecognizer>) -> Self {
        self.register(recognizer);
        self
    }

    fn register(&mut self, recognizer: Arc<dyn TextRecognizer>) {
        self.recognizers.insert(recognizer.method(), recognizer);
    }

    pub fn default_method(&self) -> OcrMethod {
        self.default_method
    }

    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes
    }

    pub fn has_engine(&self, method: OcrMethod) -> bool {
        self.recognizers.contains_key(&method)
    }

    /// Turn an optional method name from a request into an engine choice
    ///
    /// Missing or blank names select the default engine.
    pub fn resolve_method(&self, requested: Option<&str>) -> Result<OcrMethod, PipelineError> {
        match requested.map(str::trim) {
            None | Some("") => Ok(self.default_method),
            Some(name) => Ok(name.parse::<OcrMethod>()?),
        }
    }

    /// Run recognition on an already preprocessed image
    pub fn recognize(&self, image: &GrayImage, method: OcrMethod) -> Result<String, PipelineError> {
        let recognizer = self
            .recognizers
            .get(&method)
            .ok_or(OcrError::EngineUnavailable(method))?;
        Ok(recognizer.recognize(image)?)
    }

    /// Decode uploaded bytes, preprocess and recognize
    pub fn process_image(&self, bytes: &[u8], method: OcrMethod) -> Result<String, PipelineError> {
        let (image, info) = decode_image_bytes(bytes, self.max_image_bytes)?;
        debug!(
            "Decoded image: {}x{} {:?}, {} bytes",
            info.width, info.height, info.format, info.size_bytes
        );
        self.recognize(&preprocess(&image), method)
    }

    /// Load an image from disk, preprocess and recognize
    pub fn process_path(&self, path: &str, method: OcrMethod) -> Result<String, PipelineError> {
        let (image, info) = load_image_path(path, self.max_image_bytes)?;
        debug!("Loaded {}: {}x{}", path, info.width, info.height);
        self.recognize(&preprocess(&image), method)
    }

    /// Process paths in order, one result per path
    ///
    /// The first failure aborts the batch; results gathered so far are
    /// discarded.
    pub fn process_batch(
        &self,
        paths: &[String],
        method: OcrMethod,
    ) -> Result<Vec<String>, PipelineError> {
        let mut results = Vec::with_capacity(paths.len());

        for (index, path) in paths.iter().enumerate() {
            let text = self
                .process_path(path, method)
                .map_err(|e| PipelineError::BatchItem {
                    index,
                    path: path.clone(),
                    source: Box::new(e),
                })?;
            results.push(text);
        }

        Ok(results)
    }

    /// List all engines and whether they are loaded
    pub fn list_engines(&self) -> Vec<EngineInfo> {
        OcrMethod::ALL
            .iter()
            .map(|method| EngineInfo {
                name: method.to_string(),
                available: self.has_engine(*method),
                default: *method == self.default_method,
            })
            .collect()
    }
}

impl std::fmt::Debug for ImagePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePipeline")
            .field("engines", &self.recognizers.keys().collect::<Vec<_>>())
            .field("default_method", &self.default_method)
            .field("max_image_bytes", &self.max_image_bytes)
            .finish()
    }
}
