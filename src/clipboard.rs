use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Write;
use std::sync::Mutex;

use crate::errors::AppError;

/// Access to the system clipboard.
pub trait Clipboard: Send + Sync + 'static {
    fn write_text(&self, text: &str) -> Result<(), AppError>;
}

/// Clipboard for terminal hosts.
///
/// Emits an OSC 52 escape sequence; terminals that support it place the
/// payload on the system clipboard.
pub struct Osc52Clipboard<W: Write + Send + 'static> {
    out: Mutex<W>,
}

impl<W: Write + Send + 'static> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// The OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

impl<W: Write + Send + 'static> Clipboard for Osc52Clipboard<W> {
    fn write_text(&self, text: &str) -> Result<(), AppError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| AppError::ClipboardError("clipboard writer poisoned".to_string()))?;
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| AppError::ClipboardError(format!("Failed to write OSC 52: {}", e)))
    }
}
