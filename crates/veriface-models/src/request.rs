//! Validation request assembled by the caller.

use crate::credential::Credential;
use crate::photo::NormalizedPhoto;

/// Errors that can occur when constructing a [`ValidationRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    /// Subject name is empty
    EmptyName,
    /// ID card number is empty
    EmptyIdNumber,
}

impl std::fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidRequest::EmptyName => write!(f, "subject name is empty"),
            InvalidRequest::EmptyIdNumber => write!(f, "ID card number is empty"),
        }
    }
}

impl std::error::Error for InvalidRequest {}

/// Result type for request construction.
pub type RequestResult<T> = Result<T, InvalidRequest>;

/// Inputs for one validation attempt.
///
/// Constructed by the caller and moved into the pipeline; the photo and
/// credential are consumed along the way.
#[derive(Debug)]
pub struct ValidationRequest {
    pub subject_name: String,
    pub id_number: String,
    pub photo: NormalizedPhoto,
    pub credential: Credential,
}

impl ValidationRequest {
    /// Build a request, rejecting an empty name or ID number.
    ///
    /// Both text fields are trimmed before the emptiness check and stored
    /// trimmed. The ID number format itself is left to the provider.
    pub fn new(
        subject_name: impl Into<String>,
        id_number: impl Into<String>,
        photo: NormalizedPhoto,
        credential: Credential,
    ) -> RequestResult<Self> {
        let subject_name = subject_name.into().trim().to_string();
        if subject_name.is_empty() {
            return Err(InvalidRequest::EmptyName);
        }
        let id_number = id_number.into().trim().to_string();
        if id_number.is_empty() {
            return Err(InvalidRequest::EmptyIdNumber);
        }
        Ok(Self {
            subject_name,
            id_number,
            photo,
            credential,
        })
    }
}
