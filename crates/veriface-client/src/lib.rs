//! Verification provider client.
//!
//! This crate provides:
//! - The [`VerificationProvider`] capability trait
//! - The concrete Aliyun marketplace client with its config
//! - Client error classification, including degraded results for
//!   unparseable provider bodies

pub mod aliyun;
pub mod error;
pub mod provider;

pub use aliyun::{AliyunClient, AliyunConfig, ALIYUN_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::{ClientError, ClientResult};
pub use provider::VerificationProvider;
