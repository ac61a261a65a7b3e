//! Credential handling for the verification provider.
//!
//! Calls to the provider are authorized by an opaque marketplace AppCode.
//! The wrapper validates the value at construction and keeps it out of
//! Debug output, logs, and serialized data.

/// Template value shipped in vendor sample code; never a real credential.
pub const PLACEHOLDER_APPCODE: &str = "你自己的AppCode";

/// Errors that can occur when constructing a [`Credential`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// Credential value is empty
    Empty,
    /// Credential value is the vendor template placeholder
    Placeholder,
}

impl std::fmt::Display for CredentialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialError::Empty => write!(f, "credential is empty"),
            CredentialError::Placeholder => {
                write!(f, "credential is the vendor template placeholder, not a real AppCode")
            }
        }
    }
}

impl std::error::Error for CredentialError {}

/// Result type for credential construction.
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Opaque provider access token (Aliyun marketplace AppCode).
///
/// The inner value is only reachable through [`Credential::expose`]. The
/// `Debug` impl is redacted and the type is deliberately not serializable.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Validate and wrap a credential value.
    ///
    /// Surrounding whitespace is trimmed. Empty values and the vendor
    /// template placeholder are rejected.
    pub fn new(value: impl Into<String>) -> CredentialResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty);
        }
        if trimmed == PLACEHOLDER_APPCODE {
            return Err(CredentialError::Placeholder);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Raw credential value, for building the Authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
