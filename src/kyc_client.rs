use crate::errors::{AppError, NetworkFailure};
use crate::models::{KycRequest, KycResponse};
use reqwest;
use std::time::Duration;
use tracing;
use url::Url;

/// Client for the KYC processing endpoint.
///
/// One POST per submission, no authentication, no retries.
#[derive(Clone)]
pub struct KycApiClient {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl KycApiClient {
    /// Creates a new `KycApiClient`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Absolute URL of `process_kyc`.
    /// * `timeout` - Upper bound for the whole request.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create KYC client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submits the form fields and returns the approved response.
    ///
    /// # Arguments
    ///
    /// * `request` - Form fields, serialized as-is.
    ///
    /// # Returns
    ///
    /// * `Result<KycResponse, AppError>` - The response when `success` and
    ///   `kyc_approved` are both true; `NetworkError` for transport failures,
    ///   timeouts and non-2xx statuses; `ApprovalError` for rejections.
    pub async fn process_kyc(&self, request: &KycRequest) -> Result<KycResponse, AppError> {
        tracing::info!("Sending KYC request to {}", self.endpoint);
        tracing::debug!("KYC request fields: {:?}", request.redacted());

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("KYC backend returned error {}: {}", status, error_text);
            return Err(AppError::NetworkError(NetworkFailure::Status {
                status: status.as_u16(),
                body: error_text,
            }));
        }

        let body: KycResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.map_transport_error(e)
            } else {
                AppError::NetworkError(NetworkFailure::Decode(format!(
                    "Failed to parse KYC response: {}",
                    e
                )))
            }
        })?;

        if !body.is_approved() {
            let reason = body.failure_reason();
            tracing::warn!("KYC not approved: {}", reason);
            return Err(AppError::ApprovalError(reason));
        }

        tracing::info!(
            "✓ KYC approved: attestation {}",
            body.attestation_id.as_deref().unwrap_or("<none>")
        );
        Ok(body)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            tracing::error!("KYC request timed out after {:?}", self.timeout);
            AppError::NetworkError(NetworkFailure::Timeout(self.timeout))
        } else {
            tracing::error!("KYC request failed: {}", err);
            AppError::from(err)
        }
    }
}
