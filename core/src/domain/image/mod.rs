pub mod entities;
pub mod services;

pub use entities::EncodedImage;
pub use services::preprocess_image;

/// Upper bound for uploaded images, checked before decoding.
pub const MAX_IMAGE_BYTES: usize = 50 * 1024 * 1024; // 50 MB

/// Longest edge sent upstream; larger images are downscaled.
pub const MAX_IMAGE_DIMENSION: u32 = 1024;

pub const JPEG_QUALITY: u8 = 85;
