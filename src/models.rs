use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::errors::APPROVAL_FALLBACK_MESSAGE;

/// Mask written in place of sensitive document numbers in logs.
pub const REDACTED: &str = "***REDACTED***";

// ============ Request ============

/// Identity fields collected from the KYC form.
///
/// Values are sent exactly as typed; nothing is trimmed or re-encoded beyond
/// JSON serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycRequest {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Age as typed in the form.
    pub age: String,
    /// Country of residence.
    pub country: String,
    /// Brazilian taxpayer number.
    pub cpf: String,
    /// Passport number.
    pub passport: String,
}

impl KycRequest {
    /// Copy of the request safe to put in logs.
    pub fn redacted(&self) -> Self {
        Self {
            cpf: REDACTED.to_string(),
            passport: REDACTED.to_string(),
            ..self.clone()
        }
    }

    /// Names of required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("age", &self.age),
            ("country", &self.country),
            ("cpf", &self.cpf),
            ("passport", &self.passport),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

// ============ Response ============

/// Summary of the backend's decision steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReasoningPreview {
    #[serde(default)]
    pub total_steps: Option<u64>,
    #[serde(default)]
    pub steps_summary: Option<Vec<String>>,
    #[serde(default)]
    pub transparency_message: Option<String>,
}

/// Body returned by `POST /api/process_kyc`.
///
/// Rejections only carry `success`, `kyc_approved` and `reason`/`error`, so
/// every other field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KycResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub kyc_approved: bool,
    /// Kept as the raw JSON number so it displays exactly as sent.
    #[serde(default)]
    pub score: Option<Number>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub attestation_id: Option<String>,
    #[serde(default)]
    pub ipfs_cid: Option<String>,
    #[serde(default)]
    pub ipfs_url: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub certificate_url: Option<String>,
    /// Returned by some deployments; links are built client-side instead.
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(default)]
    pub reasoning_preview: Option<ReasoningPreview>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl KycResponse {
    /// True only when the backend both succeeded and approved the applicant.
    pub fn is_approved(&self) -> bool {
        self.success && self.kyc_approved
    }

    /// Why the submission was not approved: `reason`, then `error`, then a
    /// generic fallback.
    pub fn failure_reason(&self) -> String {
        self.reason
            .as_deref()
            .filter(|r| !r.is_empty())
            .or_else(|| self.error.as_deref().filter(|e| !e.is_empty()))
            .unwrap_or(APPROVAL_FALLBACK_MESSAGE)
            .to_string()
    }

    /// The IPFS CID when the backend returned a non-empty one.
    pub fn ipfs_cid(&self) -> Option<&str> {
        self.ipfs_cid.as_deref().filter(|cid| !cid.is_empty())
    }
}

// ============ Attestation record ============

/// An approved submission: what was sent and what came back.
#[derive(Debug, Clone, PartialEq)]
pub struct AttestationRecord {
    pub request: KycRequest,
    pub response: KycResponse,
    pub received_at: DateTime<Utc>,
}

impl AttestationRecord {
    pub fn new(request: KycRequest, response: KycResponse) -> Self {
        Self {
            request,
            response,
            received_at: Utc::now(),
        }
    }

    pub fn attestation_id(&self) -> &str {
        self.response.attestation_id.as_deref().unwrap_or_default()
    }
}
