//! Provider capability trait.

use async_trait::async_trait;

use veriface_models::{Credential, ValidationResult};

use crate::error::ClientResult;

/// Capability contract for an identity-verification provider.
///
/// Implementations are dispatched as trait objects so swapping providers
/// never touches the calling pipeline. `set_credential` completing
/// happens-before a subsequent `validate` observing the new value; callers
/// must not change the credential while a `validate` that expects a
/// particular one is in flight.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Submit one verification attempt.
    ///
    /// `Ok` means the provider answered with a well-formed body; whether
    /// the person matched is carried inside the result, not the error.
    async fn validate(
        &self,
        name: &str,
        id_number: &str,
        photo_base64: &str,
    ) -> ClientResult<ValidationResult>;

    /// Install the credential used by subsequent calls.
    fn set_credential(&self, credential: Credential);
}
