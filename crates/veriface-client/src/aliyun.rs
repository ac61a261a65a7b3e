//! Aliyun marketplace face/ID-card verification client.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};
use url::form_urlencoded;

use veriface_models::{Credential, ProviderVerdict, ValidationResult};

use crate::error::{ClientError, ClientResult};
use crate::provider::VerificationProvider;

/// Marketplace endpoint for ID-card/face validation.
pub const ALIYUN_ENDPOINT: &str =
    "https://jmfaceid.market.alicloudapi.com/idcard-face/validate";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the Aliyun client.
#[derive(Debug, Clone)]
pub struct AliyunConfig {
    /// Validation endpoint URL
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for AliyunConfig {
    fn default() -> Self {
        Self {
            endpoint: ALIYUN_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AliyunConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("VERIFACE_ENDPOINT")
                .unwrap_or_else(|_| ALIYUN_ENDPOINT.to_string()),
            timeout: Duration::from_secs(
                std::env::var("VERIFACE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(15),
            ),
        }
    }
}

/// Payload section of the provider response. Every field may be absent.
#[derive(Debug, Default, Deserialize)]
struct AliyunData {
    #[serde(default)]
    result: i32,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    sex: String,
    #[serde(default)]
    birthday: String,
    #[serde(default)]
    address: String,
}

/// Top-level provider response.
#[derive(Debug, Default, Deserialize)]
struct AliyunResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: AliyunData,
}

impl AliyunResponse {
    /// The payload message is more specific than the envelope message when
    /// both are present.
    fn into_verdict(self) -> ProviderVerdict {
        let message = if self.data.msg.is_empty() {
            self.msg
        } else {
            self.data.msg
        };
        ProviderVerdict {
            success: self.success,
            result_code: self.data.result,
            message,
            score: self.data.score,
            sex: self.data.sex,
            birthday: self.data.birthday,
            address: self.data.address,
        }
    }
}

/// Error body some non-200 responses carry.
#[derive(Debug, Deserialize)]
struct AliyunErrorBody {
    #[serde(default)]
    msg: String,
}

/// Client for the Aliyun marketplace verification endpoint.
pub struct AliyunClient {
    http: Client,
    config: AliyunConfig,
    credential: RwLock<Option<Credential>>,
}

impl AliyunClient {
    /// Create a new client with no credential installed.
    pub fn new(config: AliyunConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            http,
            config,
            credential: RwLock::new(None),
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(AliyunConfig::from_env())
    }

    fn credential_snapshot(&self) -> ClientResult<Credential> {
        self.credential
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| ClientError::config("no credential installed"))
    }
}

#[async_trait]
impl VerificationProvider for AliyunClient {
    async fn validate(
        &self,
        name: &str,
        id_number: &str,
        photo_base64: &str,
    ) -> ClientResult<ValidationResult> {
        // Snapshot before any I/O; a missing credential never hits the wire.
        let credential = self.credential_snapshot()?;

        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("name", name)
            .append_pair("idCardNo", id_number)
            .append_pair("facePhotoBase64", photo_base64)
            .finish();

        debug!(endpoint = %self.config.endpoint, "sending validation request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(AUTHORIZATION, format!("APPCODE {}", credential.expose()))
            .header(
                CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "provider rejected validation request");
            let message = match serde_json::from_str::<AliyunErrorBody>(&raw) {
                Ok(body) if !body.msg.is_empty() => body.msg,
                _ => raw,
            };
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AliyunResponse =
            serde_json::from_str(&raw).map_err(|source| ClientError::MalformedBody {
                raw_response: raw.clone(),
                source,
            })?;

        Ok(ValidationResult::from_verdict(parsed.into_verdict(), raw))
    }

    fn set_credential(&self, credential: Credential) {
        *self.credential.write().unwrap() = Some(credential);
    }
}
