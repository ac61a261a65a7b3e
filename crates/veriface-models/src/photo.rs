//! Normalized photo payload produced by the image pipeline.

/// Largest edge allowed on an outbound photo, in pixels.
pub const MAX_PHOTO_DIMENSION: u32 = 1024;

/// JPEG quality used when re-encoding for transport.
pub const PHOTO_JPEG_QUALITY: u8 = 90;

/// A face photograph resized and re-encoded for transport.
///
/// Both dimensions are at most [`MAX_PHOTO_DIMENSION`], aspect ratio is
/// preserved from the source, and the payload is a standard (unwrapped)
/// base64 encoding of a JPEG at [`PHOTO_JPEG_QUALITY`]. Built once per
/// validation attempt and discarded afterwards, never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct NormalizedPhoto {
    width: u32,
    height: u32,
    base64: String,
}

impl NormalizedPhoto {
    /// Wrap an already-encoded photo.
    pub fn new(width: u32, height: u32, base64: impl Into<String>) -> Self {
        Self {
            width,
            height,
            base64: base64.into(),
        }
    }

    /// Pixel width after normalization.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height after normalization.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow the base64 payload.
    pub fn as_base64(&self) -> &str {
        &self.base64
    }

    /// Consume the photo, returning the base64 payload.
    pub fn into_base64(self) -> String {
        self.base64
    }
}

// Debug prints the payload length, not the payload.
impl std::fmt::Debug for NormalizedPhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizedPhoto")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("base64_len", &self.base64.len())
            .finish()
    }
}
