//! Provider-neutral validation outcome.

use serde::{Deserialize, Serialize};

/// Parsed fields handed over by a provider client.
///
/// Each provider maps its own wire shape into this bundle; fields absent
/// from a response stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderVerdict {
    /// Provider-level outcome flag.
    pub success: bool,
    /// Provider-defined result code; meaning is presentation's concern.
    pub result_code: i32,
    /// Provider message, possibly empty.
    pub message: String,
    /// Similarity score in [0, 1]; 0 means "not reported".
    pub score: f64,
    pub sex: String,
    pub birthday: String,
    pub address: String,
}

/// Uniform outcome of one validation attempt.
///
/// `raw_response` carries the verbatim body whenever a response was
/// received, including bodies that failed structural parsing. Immutable
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub success: bool,
    pub result_code: i32,
    pub message: String,
    pub score: f64,
    pub sex: String,
    pub birthday: String,
    pub address: String,
    pub raw_response: String,
}

impl ValidationResult {
    /// Normalize a parsed provider verdict plus the verbatim body.
    pub fn from_verdict(verdict: ProviderVerdict, raw_response: impl Into<String>) -> Self {
        Self {
            success: verdict.success,
            result_code: verdict.result_code,
            message: verdict.message,
            score: verdict.score,
            sex: verdict.sex,
            birthday: verdict.birthday,
            address: verdict.address,
            raw_response: raw_response.into(),
        }
    }

    /// Degraded outcome for a response whose body could not be parsed.
    ///
    /// Everything except `raw_response` is defaulted; `success` is false.
    pub fn raw_only(raw_response: impl Into<String>) -> Self {
        Self::from_verdict(ProviderVerdict::default(), raw_response)
    }

    /// Whether the provider reported a similarity score.
    pub fn has_score(&self) -> bool {
        self.score > 0.0
    }
}
