//! Shared test doubles for the controller tests
#![allow(dead_code)]

use kyc_simulator_client::clipboard::Clipboard;
use kyc_simulator_client::config::Timings;
use kyc_simulator_client::errors::AppError;
use kyc_simulator_client::form_client::FormClient;
use kyc_simulator_client::kyc_client::KycApiClient;
use kyc_simulator_client::models::KycRequest;
use kyc_simulator_client::presentation::{ReasoningOverlay, ResultView};
use kyc_simulator_client::view::{Section, StepStatus, View};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// Snapshot of what a page would currently display.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub form: KycRequest,
    pub section: Section,
    pub submit_enabled: bool,
    pub steps: [StepStatus; 4],
    pub result: Option<ResultView>,
    pub overlay: Option<ReasoningOverlay>,
    pub scroll_locked: bool,
    pub opened: Vec<String>,
    pub copy_feedback: Option<String>,
    pub alerts: Vec<String>,
    /// Every step change in order.
    pub step_log: Vec<(usize, StepStatus)>,
}

/// View that records into a `Screen` instead of drawing.
#[derive(Default)]
pub struct RecordingView {
    screen: Mutex<Screen>,
}

impl RecordingView {
    pub fn with_form(form: KycRequest) -> Arc<Self> {
        let view = Self::default();
        view.screen.lock().unwrap().form = form;
        Arc::new(view)
    }

    pub fn screen(&self) -> Screen {
        self.screen.lock().unwrap().clone()
    }

    pub fn set_form(&self, form: KycRequest) {
        self.screen.lock().unwrap().form = form;
    }
}

impl View for RecordingView {
    fn read_form(&self) -> KycRequest {
        self.screen.lock().unwrap().form.clone()
    }

    fn clear_form(&self) {
        self.screen.lock().unwrap().form = KycRequest::default();
    }

    fn show_section(&self, section: Section) {
        self.screen.lock().unwrap().section = section;
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.screen.lock().unwrap().submit_enabled = enabled;
    }

    fn set_step(&self, index: usize, status: StepStatus) {
        let mut screen = self.screen.lock().unwrap();
        screen.steps[index] = status;
        screen.step_log.push((index, status));
    }

    fn render_result(&self, result: &ResultView) {
        self.screen.lock().unwrap().result = Some(result.clone());
    }

    fn open_overlay(&self, overlay: &ReasoningOverlay) {
        self.screen.lock().unwrap().overlay = Some(overlay.clone());
    }

    fn close_overlay(&self) {
        self.screen.lock().unwrap().overlay = None;
    }

    fn set_scroll_locked(&self, locked: bool) {
        self.screen.lock().unwrap().scroll_locked = locked;
    }

    fn open_external(&self, url: &str) {
        self.screen.lock().unwrap().opened.push(url.to_string());
    }

    fn set_copy_feedback(&self, message: Option<&str>) {
        self.screen.lock().unwrap().copy_feedback = message.map(str::to_string);
    }

    fn alert(&self, message: &str) {
        self.screen.lock().unwrap().alerts.push(message.to_string());
    }
}

/// Clipboard that keeps the last copied text, or always fails.
#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: Mutex<Option<String>>,
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            contents: Mutex::new(None),
            fail: true,
        })
    }

    pub fn read(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::ClipboardError("permission denied".to_string()));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

pub fn sample_request() -> KycRequest {
    KycRequest {
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        age: "29".to_string(),
        country: "Brazil".to_string(),
        cpf: "123.456.789-01".to_string(),
        passport: "FX123456".to_string(),
    }
}

pub fn approved_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "kyc_approved": true,
        "score": 87,
        "badge": "Verified",
        "attestation_id": "att_123",
        "ipfs_cid": "Qm123",
        "ipfs_url": "https://ipfs.io/ipfs/Qm123",
        "tx_hash": "0xabc",
        "certificate_url": "https://annaprotocol.com/verify?hash=att_123",
        "reasoning_preview": {
            "total_steps": 3,
            "steps_summary": [
                "1. Biometrics: match 98%, liveness OK",
                "2. Documents: valid Brazil",
                "3. Compliance: no OFAC hits"
            ],
            "transparency_message": "Full reasoning is stored encrypted on IPFS"
        }
    })
}

pub fn api_client(base: &str) -> KycApiClient {
    let endpoint = Url::parse(&format!("{}/api/process_kyc", base)).unwrap();
    KycApiClient::new(endpoint, Duration::from_secs(5)).unwrap()
}

pub fn fast_timings() -> Timings {
    Timings {
        step_interval: Duration::from_millis(10),
        copy_feedback: Duration::from_millis(2000),
    }
}

pub fn form_client(
    base: &str,
    view: Arc<RecordingView>,
    clipboard: Arc<MemoryClipboard>,
) -> FormClient<RecordingView, MemoryClipboard> {
    FormClient::new(api_client(base), view, clipboard, fast_timings())
}
