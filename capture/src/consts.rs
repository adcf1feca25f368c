//! Shared constants for the capture pipeline.

/// Largest side, in pixels, a capture may have after downscaling.
pub const MAX_DIMENSION: u32 = 1600;

/// Encoder quality for capture JPEG blobs.
pub const JPEG_QUALITY: f64 = 0.9;

/// MIME type of every encoded capture.
pub const JPEG_MIME: &str = "image/jpeg";
