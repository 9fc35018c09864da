use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose};
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{EncodedImage, JPEG_QUALITY, MAX_IMAGE_BYTES, MAX_IMAGE_DIMENSION},
};

/// Decode an uploaded image, flatten it to RGB, shrink it to fit the
/// provider limits and re-encode it as base64 JPEG.
///
/// CPU bound: call it from a blocking task.
pub fn preprocess_image(data: &[u8]) -> Result<EncodedImage, CoreError> {
    if data.is_empty() {
        return Err(CoreError::validation("image", "image cannot be empty"));
    }
    if data.len() > MAX_IMAGE_BYTES {
        return Err(CoreError::validation(
            "image",
            format!("image too large, maximum size is {} bytes", MAX_IMAGE_BYTES),
        ));
    }

    let decoded = image::load_from_memory(data).map_err(|e| {
        debug!("Failed to decode uploaded image: {}", e);
        CoreError::validation("image", "unsupported or corrupted image format")
    })?;

    let resized = if decoded.width() > MAX_IMAGE_DIMENSION || decoded.height() > MAX_IMAGE_DIMENSION
    {
        decoded.thumbnail(MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION)
    } else {
        decoded
    };
    let rgb = resized.to_rgb8();

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| {
            tracing::error!("Failed to encode image as JPEG: {}", e);
            CoreError::InternalServerError
        })?;
    let jpeg = buffer.into_inner();

    debug!(
        width = rgb.width(),
        height = rgb.height(),
        original_bytes = data.len(),
        encoded_bytes = jpeg.len(),
        "Image preprocessed"
    );

    Ok(EncodedImage {
        mime_type: "image/jpeg".to_string(),
        data: general_purpose::STANDARD.encode(&jpeg),
        width: rgb.width(),
        height: rgb.height(),
    })
}
