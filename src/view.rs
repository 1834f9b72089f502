//! The surface the controller draws on.
//!
//! `FormClient` never touches a concrete UI. Whatever hosts it (the terminal
//! front-end, a test recorder) implements [`View`] and is handed to the
//! controller at construction time.

use crate::models::KycRequest;
use crate::presentation::{ReasoningOverlay, ResultView};

/// The three mutually exclusive page sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Form,
    Loading,
    Result,
}

/// Visual state of one processing-step indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepStatus {
    #[default]
    Pending,
    Active,
    Complete,
}

/// Labels of the cosmetic processing steps shown while loading.
pub const LOADING_STEPS: [&str; 4] = [
    "Biometric verification",
    "Document validation",
    "Compliance screening",
    "Recording attestation on-chain",
];

/// Keys the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

/// A key press as seen by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
    /// Focus is inside a text input or textarea.
    pub in_text_input: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            in_text_input: false,
        }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(Key::Char(c))
        }
    }

    pub fn with_text_focus(mut self) -> Self {
        self.in_text_input = true;
        self
    }
}

/// How the reasoning overlay was dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    OutsideClick,
    CloseButton,
    EscapeKey,
}

/// Element handles the controller drives.
///
/// Implementations use interior mutability: the controller and its timer tasks
/// share one view behind an `Arc`.
pub trait View: Send + Sync + 'static {
    /// Current values of the form inputs.
    fn read_form(&self) -> KycRequest;

    fn clear_form(&self);

    /// Shows `section` and hides the other two.
    fn show_section(&self, section: Section);

    fn set_submit_enabled(&self, enabled: bool);

    fn set_step(&self, index: usize, status: StepStatus);

    fn render_result(&self, result: &ResultView);

    fn open_overlay(&self, overlay: &ReasoningOverlay);

    fn close_overlay(&self);

    /// Suppresses or restores scrolling of the page behind an overlay.
    fn set_scroll_locked(&self, locked: bool);

    /// Opens `url` in a new browsing context.
    fn open_external(&self, url: &str);

    /// Shows the transient copy confirmation, or removes it with `None`.
    fn set_copy_feedback(&self, message: Option<&str>);

    /// Blocking notice.
    fn alert(&self, message: &str);

    fn scroll_to_top(&self) {}
}
