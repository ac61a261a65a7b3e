//! Error types for photo normalization.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for photo normalization.
pub type ImageResult<T> = Result<T, ImageError>;

/// Errors that can occur while preparing a photo for transport.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read image file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode JPEG: {0}")]
    Encode(#[source] image::ImageError),
}
