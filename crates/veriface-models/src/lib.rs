//! Shared data models for identity verification.
//!
//! This crate provides the provider-neutral types exchanged between the
//! image pipeline, the verification client, and callers:
//! - Validation requests and normalized results
//! - The in-memory photo payload
//! - Credential wrapping with redaction

pub mod credential;
pub mod photo;
pub mod request;
pub mod result;

// Re-export common types
pub use credential::{Credential, CredentialError, CredentialResult, PLACEHOLDER_APPCODE};
pub use photo::{NormalizedPhoto, MAX_PHOTO_DIMENSION, PHOTO_JPEG_QUALITY};
pub use request::{InvalidRequest, RequestResult, ValidationRequest};
pub use result::{ProviderVerdict, ValidationResult};
