//! Photo normalization.
//!
//! Loads an image file, downsamples it when oversized, re-encodes it as
//! JPEG, and emits the base64 payload the verification form expects.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;
use tracing::debug;

use veriface_models::{NormalizedPhoto, MAX_PHOTO_DIMENSION, PHOTO_JPEG_QUALITY};

use crate::error::{ImageError, ImageResult};

/// Load a photo from disk and normalize it for transport.
///
/// Images with both dimensions within [`MAX_PHOTO_DIMENSION`] keep their
/// pixel dimensions. Larger images are scaled down proportionally with
/// Lanczos3 resampling so the larger edge lands on the limit; resampling
/// quality matters for downstream face matching. The output is always a
/// fresh JPEG at [`PHOTO_JPEG_QUALITY`], base64-encoded with the standard
/// unwrapped alphabet.
pub fn normalize(path: impl AsRef<Path>) -> ImageResult<NormalizedPhoto> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut img = image::load_from_memory(&bytes).map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (source_width, source_height) = img.dimensions();
    if source_width > MAX_PHOTO_DIMENSION || source_height > MAX_PHOTO_DIMENSION {
        img = img.resize(MAX_PHOTO_DIMENSION, MAX_PHOTO_DIMENSION, FilterType::Lanczos3);
        debug!(
            source_width,
            source_height,
            width = img.width(),
            height = img.height(),
            "downscaled oversized photo"
        );
    }

    let rgb = img.to_rgb8();
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, PHOTO_JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(ImageError::Encode)?;

    Ok(NormalizedPhoto::new(
        rgb.width(),
        rgb.height(),
        STANDARD.encode(&jpeg),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(name);
        image::RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn test_small_image_keeps_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "small.png", 640, 480);

        let photo = normalize(&path).unwrap();
        assert_eq!(photo.width(), 640);
        assert_eq!(photo.height(), 480);
    }

    #[test]
    fn test_boundary_image_keeps_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "boundary.png", 1024, 1024);

        let photo = normalize(&path).unwrap();
        assert_eq!(photo.width(), 1024);
        assert_eq!(photo.height(), 1024);
    }

    #[test]
    fn test_wide_image_downscaled_proportionally() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "wide.png", 4000, 1000);

        let photo = normalize(&path).unwrap();
        assert_eq!(photo.width(), 1024);
        assert_eq!(photo.height(), 256);
    }

    #[test]
    fn test_tall_image_downscaled_proportionally() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "tall.png", 1000, 3000);

        let photo = normalize(&path).unwrap();
        assert_eq!(photo.height(), 1024);
        // 1000 * (1024 / 3000), allow one pixel of rounding.
        assert!((photo.width() as i64 - 341).abs() <= 1);
    }

    #[test]
    fn test_output_is_jpeg_base64() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "photo.png", 320, 240);

        let photo = normalize(&path).unwrap();
        let jpeg = STANDARD.decode(photo.as_base64()).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.dimensions(), (320, 240));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.png");

        let err = normalize(&path).unwrap_err();
        assert!(matches!(err, ImageError::Io { .. }));
        assert!(err.to_string().contains("nope.png"));
    }

    #[test]
    fn test_unrecognized_bytes_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = normalize(&path).unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }
}
