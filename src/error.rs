//! Crate-wide error type.
//!
//! Transport failures keep their own taxonomy in
//! [`crate::client::ClientError`] and convert into [`DatalensError`] at
//! the ingestion boundary.

use thiserror::Error;

use crate::client::ClientError;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, DatalensError>;

/// Errors surfaced by the ingestion and presentation layer.
#[derive(Debug, Error)]
pub enum DatalensError {
    /// Local pre-request validation failed; nothing reached the network.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The requested operation is not legal in the current state.
    #[error("Invalid transition: {action} is not permitted while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// A request is already in flight; exactly one may be outstanding.
    #[error("A request is already in progress")]
    RequestInFlight,

    /// The transport failed or returned no usable report.
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// Report serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DatalensError {
    /// Creates a validation error with the given user-facing message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for local validation failures that never left the client.
    pub fn is_validation(&self) -> bool {
        matches!(self, DatalensError::Validation(_))
    }
}

impl From<serde_json::Error> for DatalensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
