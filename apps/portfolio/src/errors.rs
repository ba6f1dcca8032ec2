use thiserror::Error;

/// Application-level error type.
/// Only startup (configuration, profile override) can fail;
/// rendering and the clipboard action never surface an `AppError`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load profile from {path}: {reason}")]
    ProfileLoad { path: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons a clipboard write can fail. Recovered locally by the copy action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write rejected: {0}")]
    WriteRejected(String),
}
