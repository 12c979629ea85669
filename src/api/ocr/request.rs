// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR upload parsing

use axum::body::Bytes;
use axum_extra::extract::Multipart;

use crate::api::errors::ApiError;

/// Multipart field carrying the image file
pub const IMAGE_FIELD: &str = "image";

/// Optional multipart text field naming the OCR engine
pub const METHOD_FIELD: &str = "method";

/// Fields read from a POST /ocr_process multipart body
#[derive(Debug, Default)]
pub struct OcrUpload {
    /// Raw image bytes (None if absent or empty)
    pub image: Option<Bytes>,
    /// Requested OCR engine
    pub method: Option<String>,
}

impl OcrUpload {
    /// Collect the known fields from a multipart stream
    ///
    /// Unknown fields are skipped. A body cut off by the request size
    /// limit is reported as `ApiError::ImageTooLarge`.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut upload = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some(IMAGE_FIELD) => {
                    let bytes = field.bytes().await?;
                    if !bytes.is_empty() {
                        upload.image = Some(bytes);
                    }
                }
                Some(METHOD_FIELD) => {
                    let text = field.text().await?;
                    upload.method = Some(text);
                }
                _ => {}
            }
        }

        Ok(upload)
    }
}
