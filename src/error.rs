//! Unified error types for tracemark.
//!
//! Member crates report [`TraceError`] and [`DecodeError`]; this module
//! folds them into one error with classification helpers.

use thiserror::Error;
use tracemark_core::{Side, TraceError};
use tracemark_wire::DecodeError;

/// All tracemark errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rejected by the trace algebra (validation, variant, argument, undefined)
    #[error(transparent)]
    Trace(TraceError),

    /// JSON input that does not have the expected shape
    #[error(transparent)]
    Decode(DecodeError),

    /// Highlight settings that could not be read
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for tracemark operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is malformed raw step input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Trace(TraceError::Validation { .. }))
    }

    /// Check if this is an unrecognized trace variant tag.
    pub fn is_invalid_variant(&self) -> bool {
        matches!(self, Error::Trace(TraceError::InvalidVariant { .. }))
    }

    /// Check if this is a bad prefix-extraction count.
    pub fn is_argument(&self) -> bool {
        matches!(self, Error::Trace(TraceError::Argument { .. }))
    }

    /// Check if a required trace was not supplied.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Error::Trace(TraceError::UndefinedTrace { .. }))
    }

    /// Check if JSON input had the wrong shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Side named by a two-sided failure.
    pub fn side(&self) -> Option<Side> {
        match self {
            Error::Trace(e) => e.side(),
            _ => None,
        }
    }
}

impl From<TraceError> for Error {
    fn from(e: TraceError) -> Self {
        Error::Trace(e)
    }
}

// A decode failure caused by the trace algebra is reported as such.
impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::Trace(inner) => Error::Trace(inner),
            other => Error::Decode(other),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
