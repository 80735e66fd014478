//! # Error Types
//!
//! Failures a terminal action can settle with. SDK-level failures are
//! carried as values inside [`ActionStatus::Failure`] - the bridge never
//! panics for anything the hardware reports.
//!
//! [`ActionStatus::Failure`]: crate::types::ActionStatus::Failure

use thiserror::Error;

/// Errors surfaced by the payment action bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerminalError {
    /// The SDK reported a failure through its callback. The code and
    /// message are passed through opaquely; interpretation belongs to the
    /// orchestration layer.
    #[error("terminal SDK failure [{code}]: {message}")]
    Sdk { code: String, message: String },

    /// The SDK dropped its callback without ever reporting a result.
    /// This is a contract violation on the SDK side, surfaced as a
    /// terminal failure so the consumer is never left hanging.
    #[error("terminal SDK dropped its callback without reporting a result")]
    CallbackDropped,

    /// The request could not be shaped into SDK parameters.
    #[error("invalid payment request: {0}")]
    InvalidRequest(String),
}

impl TerminalError {
    /// Opaque SDK failure passthrough.
    pub fn sdk(code: impl Into<String>, message: impl Into<String>) -> Self {
        TerminalError::Sdk {
            code: code.into(),
            message: message.into(),
        }
    }
}
