// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image preprocessing before OCR

use image::{DynamicImage, GrayImage};
use imageproc::contrast::equalize_histogram;
use imageproc::filter::gaussian_blur_f32;

/// Gaussian blur sigma
///
/// Matches a 5x5 kernel with sigma derived from the kernel size:
/// 0.3 * ((5 - 1) * 0.5 - 1) + 0.8 = 1.1
pub const BLUR_SIGMA: f32 = 1.1;

/// Normalize an image for recognition
///
/// Steps:
/// 1. Convert to 8-bit grayscale
/// 2. Gaussian blur to suppress noise
/// 3. Histogram equalization to normalize contrast
///
/// Output dimensions match the input. Identical input always yields
/// identical output.
pub fn preprocess(image: &DynamicImage) -> GrayImage {
    let gray = image.to_luma8();
    if gray.width() == 0 || gray.height() == 0 {
        return gray;
    }

    let blurred = gaussian_blur_f32(&gray, BLUR_SIGMA);
    equalize_histogram(&blurred)
}
