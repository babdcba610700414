//! Error types for mounting the widget and talking to the host page.

use thiserror::Error;

/// Errors raised while assembling the widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Required element not found: {0}")]
    MissingElement(String),
    #[error("Browser global unavailable: {0}")]
    MissingGlobal(&'static str),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for widget setup.
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Errors reported by a [`Host`](crate::host::Host) capability.
///
/// None of these reach the user; the widget logs them and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Capability not supported: {0}")]
    Unsupported(&'static str),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("JavaScript error: {0}")]
    Js(String),
}

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;
