//! Decode errors and their wire encoding
//!
//! Failures crossing back to the host are encoded as:
//! ```json
//! {"code": "InvalidVariant", "message": "invalid cons on second trace: 'Invalid'"}
//! ```

use serde_json::{json, Value};
use thiserror::Error;
use tracemark_core::TraceError;

/// Error decoding JSON into traces, steps or program trees
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input was well-formed but rejected by the trace algebra
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// A tagged trace record with a missing or mistyped field
    #[error("malformed trace: {0}")]
    MalformedTrace(String),

    /// A step array that is neither an array nor `null`, or a bad element
    #[error("malformed steps: {0}")]
    MalformedSteps(String),
}

impl DecodeError {
    /// Stable error code for the wire
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::Trace(TraceError::Validation { .. }) => "Validation",
            DecodeError::Trace(TraceError::InvalidVariant { .. }) => "InvalidVariant",
            DecodeError::Trace(TraceError::Argument { .. }) => "Argument",
            DecodeError::Trace(TraceError::UndefinedTrace { .. }) => "UndefinedTrace",
            DecodeError::MalformedTrace(_) => "MalformedTrace",
            DecodeError::MalformedSteps(_) => "MalformedSteps",
        }
    }

    /// The underlying trace error, if any
    pub fn as_trace_error(&self) -> Option<&TraceError> {
        match self {
            DecodeError::Trace(e) => Some(e),
            _ => None,
        }
    }
}

/// Encode a decode error as `{"code", "message"}`
pub fn encode_error(error: &DecodeError) -> Value {
    json!({
        "code": error.code(),
        "message": error.to_string(),
    })
}
