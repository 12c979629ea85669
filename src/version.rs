// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the OCR Gateway

/// Semantic version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "api-key-auth",
    "tesseract",
    "ocrs",
    "image-preprocessing",
    "batch-processing",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("OCR Gateway {}", VERSION)
}
