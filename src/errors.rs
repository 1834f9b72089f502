use std::fmt;
use std::time::Duration;

/// Message shown when the KYC service cannot be reached at all.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Unable to connect to the KYC service. Please try again.";

/// Fallback when a rejection body carries neither `reason` nor `error`.
pub const APPROVAL_FALLBACK_MESSAGE: &str = "KYC processing failed";

/// Ways the call to the KYC backend can fail before a decision is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkFailure {
    /// Connection refused, DNS failure, reset, etc.
    Transport(String),
    /// No response within the configured timeout.
    Timeout(Duration),
    /// The backend answered with a non-2xx status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },
    /// 2xx answer whose body is not a KYC response.
    Decode(String),
}

/// Application-specific error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Transport failure, timeout or non-2xx status from the KYC backend.
    NetworkError(NetworkFailure),
    /// Well-formed response in which the backend rejected the applicant.
    ApprovalError(String),
    /// Writing to the clipboard failed.
    ClipboardError(String),
    /// Invalid or missing configuration.
    ConfigError(String),
    /// The action is not allowed in the current UI state.
    InvalidState(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NetworkError(NetworkFailure::Transport(msg)) => {
                write!(f, "Network error: {}", msg)
            }
            AppError::NetworkError(NetworkFailure::Timeout(after)) => {
                write!(f, "Network error: no response after {}s", after.as_secs_f64())
            }
            AppError::NetworkError(NetworkFailure::Status { status, body }) => {
                write!(f, "Network error: HTTP {}: {}", status, body)
            }
            AppError::NetworkError(NetworkFailure::Decode(msg)) => {
                write!(f, "Network error: invalid response body: {}", msg)
            }
            AppError::ApprovalError(reason) => write!(f, "KYC not approved: {}", reason),
            AppError::ClipboardError(msg) => write!(f, "Clipboard error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Text presented to the user in a blocking notice.
    ///
    /// Rejections show the backend's reason verbatim; transport failures show a
    /// generic connection message instead of the low-level error.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NetworkError(NetworkFailure::Transport(_)) => {
                CONNECTION_ERROR_MESSAGE.to_string()
            }
            AppError::NetworkError(NetworkFailure::Timeout(_)) => {
                "The KYC service did not respond in time. Please try again.".to_string()
            }
            AppError::NetworkError(NetworkFailure::Status { status, body }) => {
                format!("HTTP {}: {}", status, body)
            }
            AppError::NetworkError(NetworkFailure::Decode(_)) => {
                "Unexpected response from the KYC service.".to_string()
            }
            AppError::ApprovalError(reason) => reason.clone(),
            AppError::ClipboardError(_) => "Failed to copy to clipboard".to_string(),
            AppError::ConfigError(msg) | AppError::InvalidState(msg) => msg.clone(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    ///
    /// Timeouts carry no duration here; the client re-maps them with its own.
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::NetworkError(NetworkFailure::Decode(err.to_string()))
        } else {
            AppError::NetworkError(NetworkFailure::Transport(err.to_string()))
        }
    }
}
