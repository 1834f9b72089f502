//! The KYC form controller.
//!
//! Owns the UI state (visible section, current attestation record, overlay
//! flag, step animation) and moves it through
//! `Form -> Loading -> Result | Form`. All drawing goes through the injected
//! [`View`]; all network traffic through [`KycApiClient`].

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::animation::{reset_steps, StepAnimation};
use crate::clipboard::Clipboard;
use crate::config::{Config, Timings};
use crate::errors::AppError;
use crate::kyc_client::KycApiClient;
use crate::models::AttestationRecord;
use crate::presentation::{ReasoningOverlay, ResultView};
use crate::view::{DismissReason, Key, KeyEvent, Section, View};

pub const COPY_CONFIRMATION: &str = "Copied to clipboard!";
pub const NO_ATTESTATION_NOTICE: &str = "No attestation data available";
pub const NO_CID_NOTICE: &str = "IPFS CID not available";

#[derive(Default)]
struct UiState {
    section: Section,
    record: Option<AttestationRecord>,
    overlay_open: bool,
    animation: Option<StepAnimation>,
}

pub struct FormClient<V: View, C: Clipboard> {
    api: KycApiClient,
    view: Arc<V>,
    clipboard: Arc<C>,
    timings: Timings,
    state: Mutex<UiState>,
}

/// Fills the Result section from `record`.
pub fn render_result<V: View + ?Sized>(view: &V, record: &AttestationRecord) {
    view.render_result(&ResultView::from_record(record));
}

impl<V: View, C: Clipboard> FormClient<V, C> {
    pub fn new(api: KycApiClient, view: Arc<V>, clipboard: Arc<C>, timings: Timings) -> Self {
        view.show_section(Section::Form);
        view.set_submit_enabled(true);
        Self {
            api,
            view,
            clipboard,
            timings,
            state: Mutex::new(UiState::default()),
        }
    }

    pub fn from_config(config: &Config, view: Arc<V>, clipboard: Arc<C>) -> Result<Self, AppError> {
        let api = KycApiClient::new(config.api_url.clone(), config.request_timeout)?;
        Ok(Self::new(api, view, clipboard, config.timings()))
    }

    fn state(&self) -> MutexGuard<'_, UiState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn section(&self) -> Section {
        self.state().section
    }

    /// The approved submission currently on display, if any.
    pub fn current_record(&self) -> Option<AttestationRecord> {
        self.state().record.clone()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.state().overlay_open
    }

    /// Sends the form to the KYC backend and shows the outcome.
    ///
    /// Only accepted while the form is showing. On failure the form comes
    /// back, the reason is alerted and no record is kept.
    pub async fn submit(&self) -> Result<AttestationRecord, AppError> {
        let request = self.view.read_form();
        let submission_id = Uuid::new_v4();

        {
            let mut state = self.state();
            match state.section {
                Section::Form => {}
                Section::Loading => {
                    tracing::warn!("[{}] Submission ignored: another one is in flight", submission_id);
                    return Err(AppError::InvalidState(
                        "A KYC submission is already in progress".to_string(),
                    ));
                }
                Section::Result => {
                    return Err(AppError::InvalidState(
                        "Reset the form before submitting again".to_string(),
                    ));
                }
            }

            let missing = request.missing_fields();
            if !missing.is_empty() {
                let message = format!("Please fill in all required fields: {}", missing.join(", "));
                drop(state);
                self.view.alert(&message);
                return Err(AppError::InvalidState(message));
            }

            tracing::info!("[{}] KYC submission started", submission_id);
            tracing::debug!("[{}] Form data: {:?}", submission_id, request.redacted());

            state.section = Section::Loading;
            state.record = None;

            self.view.set_submit_enabled(false);
            self.view.show_section(Section::Loading);
            reset_steps(self.view.as_ref());
            state.animation = Some(StepAnimation::start(
                self.view.clone(),
                self.timings.step_interval,
            ));
        }

        let outcome = self.api.process_kyc(&request).await;

        let mut state = self.state();
        if let Some(animation) = state.animation.take() {
            animation.cancel();
        }
        self.view.set_submit_enabled(true);

        match outcome {
            Ok(response) => {
                let record = AttestationRecord::new(request, response);
                state.section = Section::Result;
                state.record = Some(record.clone());
                drop(state);

                render_result(self.view.as_ref(), &record);
                self.view.show_section(Section::Result);
                tracing::info!(
                    "[{}] ✓ Attestation {} displayed",
                    submission_id,
                    record.attestation_id()
                );
                Ok(record)
            }
            Err(err) => {
                state.section = Section::Form;
                state.record = None;
                drop(state);

                tracing::error!("[{}] Error processing KYC: {}", submission_id, err);
                self.view.show_section(Section::Form);
                self.view.alert(&err.user_message());
                Err(err)
            }
        }
    }

    /// Opens the reasoning overlay and the IPFS document.
    ///
    /// Returns `false` after showing a notice when there is no record or the
    /// record has no IPFS CID.
    pub fn open_reasoning_detail(&self) -> bool {
        let Some(record) = self.current_record() else {
            self.view.alert(NO_ATTESTATION_NOTICE);
            return false;
        };
        let Some(overlay) = ReasoningOverlay::from_record(&record) else {
            self.view.alert(NO_CID_NOTICE);
            return false;
        };

        self.state().overlay_open = true;
        self.view.open_overlay(&overlay);
        self.view.set_scroll_locked(true);

        if overlay.ipfs_url.is_empty() {
            tracing::warn!("Attestation {} has no IPFS URL", overlay.attestation_id);
        } else {
            self.view.open_external(&overlay.ipfs_url);
        }
        true
    }

    /// Dismisses the overlay. Returns `false` when none was open.
    pub fn close_reasoning_detail(&self, reason: DismissReason) -> bool {
        {
            let mut state = self.state();
            if !state.overlay_open {
                return false;
            }
            state.overlay_open = false;
        }
        tracing::debug!("Reasoning overlay dismissed: {:?}", reason);
        self.view.close_overlay();
        self.view.set_scroll_locked(false);
        true
    }

    /// Copies `text` in the background.
    ///
    /// Success shows the confirmation for the configured duration; failure
    /// shows a blocking notice. The UI state is not touched either way.
    pub fn copy_to_clipboard(&self, text: &str) -> JoinHandle<()> {
        let view = self.view.clone();
        let clipboard = self.clipboard.clone();
        let text = text.to_string();
        let feedback = self.timings.copy_feedback;

        tokio::spawn(async move {
            match clipboard.write_text(&text) {
                Ok(()) => {
                    view.set_copy_feedback(Some(COPY_CONFIRMATION));
                    tokio::time::sleep(feedback).await;
                    view.set_copy_feedback(None);
                }
                Err(e) => {
                    tracing::error!("Failed to copy: {}", e);
                    view.alert(&e.user_message());
                }
            }
        })
    }

    /// Copies the current record's IPFS CID.
    pub fn copy_ipfs_cid(&self) -> Option<JoinHandle<()>> {
        let cid = self
            .current_record()
            .and_then(|record| record.response.ipfs_cid().map(str::to_string));
        match cid {
            Some(cid) => Some(self.copy_to_clipboard(&cid)),
            None => {
                self.view.alert(NO_CID_NOTICE);
                None
            }
        }
    }

    /// Back to an empty form with no attestation kept.
    ///
    /// Ignored while a submission is in flight, so the form can't be sent
    /// again before the pending request settles. Returns `false` then.
    pub fn reset_form(&self) -> bool {
        let overlay_was_open = {
            let mut state = self.state();
            if state.section == Section::Loading {
                tracing::warn!("Reset ignored: a KYC submission is in progress");
                return false;
            }
            state.record = None;
            state.section = Section::Form;
            std::mem::replace(&mut state.overlay_open, false)
        };

        self.view.clear_form();
        if overlay_was_open {
            self.view.close_overlay();
            self.view.set_scroll_locked(false);
        }
        self.view.show_section(Section::Form);
        self.view.set_submit_enabled(true);
        reset_steps(self.view.as_ref());
        self.view.scroll_to_top();
        tracing::info!("Form reset");
        true
    }

    /// Keyboard shortcuts: Escape closes the overlay; Ctrl/Cmd+R resets while
    /// the result is showing and focus is outside text inputs.
    ///
    /// Returns `true` when the key was consumed.
    pub fn handle_key(&self, event: KeyEvent) -> bool {
        match event.key {
            Key::Escape => self.close_reasoning_detail(DismissReason::EscapeKey),
            Key::Char('r') if event.ctrl || event.meta => {
                if event.in_text_input || self.section() != Section::Result {
                    return false;
                }
                self.reset_form()
            }
            _ => false,
        }
    }
}
