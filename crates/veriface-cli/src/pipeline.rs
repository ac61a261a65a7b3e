//! Sequential validation pipeline.

use tracing::info;

use veriface_client::VerificationProvider;
use veriface_models::{ValidationRequest, ValidationResult};

use crate::error::AppResult;

/// Run one validation attempt end to end.
///
/// Installs the request's credential on the provider, then validates.
/// Strictly sequential; retry and cancellation policy belong to the
/// caller. The subject's name is deliberately kept out of the logs.
pub async fn execute(
    provider: &dyn VerificationProvider,
    request: ValidationRequest,
) -> AppResult<ValidationResult> {
    provider.set_credential(request.credential);

    info!(
        photo_width = request.photo.width(),
        photo_height = request.photo.height(),
        "submitting validation request"
    );

    let photo_base64 = request.photo.into_base64();
    let result = provider
        .validate(&request.subject_name, &request.id_number, &photo_base64)
        .await?;

    info!(
        success = result.success,
        result_code = result.result_code,
        "validation completed"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;

    use veriface_client::{ClientError, ClientResult};
    use veriface_models::{Credential, NormalizedPhoto, ProviderVerdict};

    use crate::error::AppError;

    #[derive(Default)]
    struct StubProvider {
        credential: Mutex<Option<Credential>>,
        calls: Mutex<Vec<(String, String, String)>>,
        fail_with_status: Option<u16>,
    }

    #[async_trait]
    impl VerificationProvider for StubProvider {
        async fn validate(
            &self,
            name: &str,
            id_number: &str,
            photo_base64: &str,
        ) -> ClientResult<ValidationResult> {
            if self.credential.lock().unwrap().is_none() {
                return Err(ClientError::config("no credential installed"));
            }
            self.calls.lock().unwrap().push((
                name.to_string(),
                id_number.to_string(),
                photo_base64.to_string(),
            ));
            if let Some(status) = self.fail_with_status {
                return Err(ClientError::Status {
                    status,
                    message: "stub failure".to_string(),
                });
            }
            Ok(ValidationResult::from_verdict(
                ProviderVerdict {
                    success: true,
                    result_code: 1,
                    ..ProviderVerdict::default()
                },
                "{}",
            ))
        }

        fn set_credential(&self, credential: Credential) {
            *self.credential.lock().unwrap() = Some(credential);
        }
    }

    fn request() -> ValidationRequest {
        ValidationRequest::new(
            "张三",
            "110101199003074258",
            NormalizedPhoto::new(64, 64, "cGhvdG8="),
            Credential::new("stub-appcode").unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_execute_installs_credential_before_validate() {
        // The stub rejects validate calls without a credential, so success
        // proves the ordering.
        let provider = StubProvider::default();
        let result = execute(&provider, request()).await.unwrap();
        assert!(result.success);

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "张三");
        assert_eq!(calls[0].1, "110101199003074258");
        assert_eq!(calls[0].2, "cGhvdG8=");
    }

    #[tokio::test]
    async fn test_execute_propagates_client_errors() {
        let provider = StubProvider {
            fail_with_status: Some(502),
            ..StubProvider::default()
        };
        let err = execute(&provider, request()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Client(ClientError::Status { status: 502, .. })
        ));
    }
}
