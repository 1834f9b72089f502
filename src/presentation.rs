//! Display values derived from an attestation record.
//!
//! Everything here is a pure function of the record; the server's values are
//! shown as-is and never recomputed.

use regex::Regex;
use std::sync::OnceLock;

use crate::links::{dashboard_url, explorer_tx_url};
use crate::models::{AttestationRecord, ReasoningPreview};

const NOT_AVAILABLE: &str = "N/A";

/// The decision trail shown under the result and in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTrail {
    pub total_steps: u64,
    pub steps: Vec<String>,
    pub transparency_message: String,
}

impl DecisionTrail {
    /// Builds the trail when the preview carries a step summary.
    pub fn from_preview(preview: Option<&ReasoningPreview>) -> Option<Self> {
        let preview = preview?;
        let steps = preview.steps_summary.clone()?;
        Some(Self {
            total_steps: preview.total_steps.unwrap_or(steps.len() as u64),
            steps,
            transparency_message: preview.transparency_message.clone().unwrap_or_default(),
        })
    }

    pub fn header(&self) -> String {
        format!("AI Decision Trail ({} steps):", self.total_steps)
    }

    /// One completed-checkmark line per step.
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(|step| format!("✓ {}", step)).collect()
    }

    /// Steps renumbered from 1, dropping any numbering the server put in front.
    pub fn numbered_steps(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, strip_step_number(step)))
            .collect()
    }
}

/// Removes a leading `"3. "` style prefix from a step summary.
pub fn strip_step_number(step: &str) -> &str {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    let prefix = PREFIX.get_or_init(|| Regex::new(r"^\d+\.\s*").unwrap());
    match prefix.find(step) {
        Some(m) => &step[m.end()..],
        None => step,
    }
}

/// Everything the Result section displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub user_name: String,
    /// `"<score>/100"`.
    pub score: String,
    pub badge: String,
    pub country: String,
    pub attestation_id: String,
    pub ipfs_cid: String,
    pub explorer_url: String,
    pub certificate_url: String,
    pub ipfs_url: String,
    pub dashboard_url: String,
    /// When the approval came back, `YYYY-MM-DD HH:MM:SS UTC`.
    pub verified_at: String,
    pub decision_trail: Option<DecisionTrail>,
}

impl ResultView {
    pub fn from_record(record: &AttestationRecord) -> Self {
        let response = &record.response;
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            user_name: record.request.name.clone(),
            score: format!(
                "{}/100",
                response
                    .score
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
            ),
            badge: text(&response.badge),
            country: record.request.country.clone(),
            attestation_id: record.attestation_id().to_string(),
            ipfs_cid: response.ipfs_cid().unwrap_or(NOT_AVAILABLE).to_string(),
            explorer_url: explorer_tx_url(response.tx_hash.as_deref().unwrap_or_default()),
            certificate_url: text(&response.certificate_url),
            ipfs_url: text(&response.ipfs_url),
            dashboard_url: dashboard_url(record.attestation_id()),
            verified_at: record.received_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            decision_trail: DecisionTrail::from_preview(response.reasoning_preview.as_ref()),
        }
    }
}

/// Contents of the reasoning-detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningOverlay {
    pub attestation_id: String,
    pub ipfs_cid: String,
    pub ipfs_url: String,
    pub dashboard_url: String,
    /// Renumbered step list; empty when the server sent no summary.
    pub steps: Vec<String>,
}

impl ReasoningOverlay {
    /// `None` unless the record carries a non-empty IPFS CID.
    pub fn from_record(record: &AttestationRecord) -> Option<Self> {
        let response = &record.response;
        let ipfs_cid = response.ipfs_cid()?.to_string();
        let steps = DecisionTrail::from_preview(response.reasoning_preview.as_ref())
            .map(|trail| trail.numbered_steps())
            .unwrap_or_default();

        Some(Self {
            attestation_id: record.attestation_id().to_string(),
            ipfs_cid,
            ipfs_url: response.ipfs_url.clone().unwrap_or_default(),
            dashboard_url: dashboard_url(record.attestation_id()),
            steps,
        })
    }
}
