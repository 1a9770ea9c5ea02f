//! Core error types for studyflow-core.
//!
//! Every failure in this library is a synchronous, recoverable validation
//! or state-guard error returned to the caller. Operations either fully
//! apply their state transition or reject with no side effect.

use thiserror::Error;

use crate::session::SessionKind;

/// Core error type for studyflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected configuration input: non-numeric, negative, or otherwise
    /// out of range.
    #[error("invalid configuration for '{field}': {message}")]
    InvalidConfiguration { field: String, message: String },

    /// A control call was issued from a state that forbids it.
    #[error("'{operation}' is not valid while {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionKind,
    },
}

impl CoreError {
    pub(crate) fn invalid_configuration(field: &str, message: impl Into<String>) -> Self {
        CoreError::InvalidConfiguration {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
