//! Verification client error types.

use thiserror::Error;

use veriface_models::ValidationResult;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Client configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed provider response: {source}")]
    MalformedBody {
        raw_response: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status associated with the failure, when one was observed.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether a retry with the same inputs could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(_) => true,
            ClientError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Whether the failure was the request timing out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Network(e) if e.is_timeout())
    }

    /// Displayable partial result for a body that failed parsing.
    ///
    /// The raw body survives even when its structure did not, so callers
    /// can show it alongside the error.
    pub fn degraded_result(&self) -> Option<ValidationResult> {
        match self {
            ClientError::MalformedBody { raw_response, .. } => {
                Some(ValidationResult::raw_only(raw_response.clone()))
            }
            _ => None,
        }
    }
}
