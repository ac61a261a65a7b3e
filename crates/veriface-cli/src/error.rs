//! CLI error types.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(
        "No credential: pass --appcode, set VERIFACE_APPCODE, or put \"appcode\" in the config file"
    )]
    MissingCredential,

    #[error("Invalid credential: {0}")]
    Credential(#[from] veriface_models::CredentialError),

    #[error("Invalid input: {0}")]
    Input(#[from] veriface_models::InvalidRequest),

    #[error("Image error: {0}")]
    Image(#[from] veriface_image::ImageError),

    #[error("Validation failed: {0}")]
    Client(#[from] veriface_client::ClientError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
