//! Text rendering of the KYC page for the command-line host.

use std::io::Write;
use std::sync::Mutex;

use crate::models::KycRequest;
use crate::presentation::{ReasoningOverlay, ResultView};
use crate::view::{Section, StepStatus, View, LOADING_STEPS};

/// A [`View`] that prints every UI change as text.
///
/// The form is a plain in-memory value the host fills after prompting.
pub struct TerminalView<W: Write + Send + 'static> {
    out: Mutex<W>,
    form: Mutex<KycRequest>,
}

impl<W: Write + Send + 'static> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            form: Mutex::new(KycRequest::default()),
        }
    }

    /// Stores what the user typed, like filling in the HTML inputs.
    pub fn fill_form(&self, request: KycRequest) {
        *self.form.lock().unwrap_or_else(|p| p.into_inner()) = request;
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|p| p.into_inner())
    }

    fn print(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(|p| p.into_inner());
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            tracing::warn!("Terminal write failed: {}", e);
        }
    }
}

impl<W: Write + Send + 'static> View for TerminalView<W> {
    fn read_form(&self) -> KycRequest {
        self.form.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn clear_form(&self) {
        self.fill_form(KycRequest::default());
    }

    fn show_section(&self, section: Section) {
        match section {
            Section::Form => self.print("\n== KYC form =="),
            Section::Loading => self.print("\n== Processing KYC... =="),
            // The result block is printed by render_result.
            Section::Result => {}
        }
    }

    fn set_submit_enabled(&self, _enabled: bool) {}

    fn set_step(&self, index: usize, status: StepStatus) {
        let Some(label) = LOADING_STEPS.get(index) else {
            return;
        };
        match status {
            StepStatus::Pending => {}
            StepStatus::Active => self.print(&format!("  … {}", label)),
            StepStatus::Complete => self.print(&format!("  ✓ {}", label)),
        }
    }

    fn render_result(&self, result: &ResultView) {
        let mut lines = vec![
            "\n== KYC approved ==".to_string(),
            format!("User:           {}", result.user_name),
            format!("Trust Score:    {}", result.score),
            format!("Badge Awarded:  {}", result.badge),
            format!("Country:        {}", result.country),
            format!("Attestation ID: {}", result.attestation_id),
            format!("IPFS CID:       {}", result.ipfs_cid),
            format!("Verified at:    {}", result.verified_at),
        ];
        if let Some(trail) = &result.decision_trail {
            lines.push(String::new());
            lines.push(trail.header());
            lines.extend(trail.lines().into_iter().map(|line| format!("  {}", line)));
            if !trail.transparency_message.is_empty() {
                lines.push(format!("  {}", trail.transparency_message));
            }
        }
        lines.push(String::new());
        lines.push(format!("Certificate:    {}", result.certificate_url));
        lines.push(format!("IPFS:           {}", result.ipfs_url));
        lines.push(format!("Explorer:       {}", result.explorer_url));
        lines.push(format!("Dashboard:      {}", result.dashboard_url));
        self.print(&lines.join("\n"));
    }

    fn open_overlay(&self, overlay: &ReasoningOverlay) {
        let mut lines = vec![
            "\n-- AI Reasoning on IPFS --".to_string(),
            format!("Attestation ID: {}", overlay.attestation_id),
            format!("IPFS CID:       {}  (press c to copy)", overlay.ipfs_cid),
        ];
        if !overlay.steps.is_empty() {
            lines.push("Decision Trail Preview:".to_string());
            lines.extend(overlay.steps.iter().map(|step| format!("  {}", step)));
        }
        lines.push(format!("Open IPFS File: {}", overlay.ipfs_url));
        lines.push(format!("Dashboard:      {}", overlay.dashboard_url));
        lines.push("(press x or Esc to close)".to_string());
        self.print(&lines.join("\n"));
    }

    fn close_overlay(&self) {
        self.print("-- closed --");
    }

    fn set_scroll_locked(&self, _locked: bool) {}

    fn open_external(&self, url: &str) {
        self.print(&format!("Opening {}", url));
    }

    fn set_copy_feedback(&self, message: Option<&str>) {
        if let Some(message) = message {
            self.print(&format!("✓ {}", message));
        }
    }

    fn alert(&self, message: &str) {
        self.print(&format!("\n! {}", message));
    }
}
