//! Command-line identity verification tool.
//!
//! Wires the photo pipeline and the verification client into a single
//! sequential run: resolve the credential, normalize the photo, validate,
//! render the outcome.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use error::{AppError, AppResult};
