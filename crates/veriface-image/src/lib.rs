//! Photo normalization pipeline.
//!
//! Prepares a face photograph for the verification call: decode the source
//! file, downscale oversized images within the transport limit, re-encode
//! as JPEG, and base64 the result.

pub mod error;
pub mod normalize;

pub use error::{ImageError, ImageResult};
pub use normalize::normalize;
