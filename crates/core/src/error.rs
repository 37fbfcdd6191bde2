//! Error types for trace operations
//!
//! Every fallible trace operation returns [`TraceError`]. The variants map
//! onto four failure families:
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `Validation` | step-sequence builders (null/undefined/empty input) |
//! | `InvalidVariant` | decoding or comparing a tag outside `Empty`/`Cons`/`Union` |
//! | `Argument` | prefix extraction with an undefined, null or negative count |
//! | `UndefinedTrace` | equality, length and prefix extraction on a missing trace |
//!
//! Containment never fails: a missing argument yields `false`.

use std::fmt;
use thiserror::Error;

/// Which argument of a two-sided operation an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first (left) argument
    First,
    /// The second (right) argument
    Second,
}

impl Side {
    /// Lowercase ordinal used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::First => "first",
            Side::Second => "second",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a raw step sequence was rejected
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationReason {
    /// The container itself is null
    NullContainer,
    /// The container itself is undefined
    UndefinedContainer,
    /// At least one element is null
    NullElement,
    /// At least one element is undefined
    UndefinedElement,
    /// The container has no elements
    Empty,
}

impl ValidationReason {
    /// Predicate phrase used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationReason::NullContainer => "is null",
            ValidationReason::UndefinedContainer => "is undefined",
            ValidationReason::NullElement => "contains null values",
            ValidationReason::UndefinedElement => "contains undefined values",
            ValidationReason::Empty => "is empty",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a prefix count was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentReason {
    /// The count was not supplied
    Undefined,
    /// The count was explicitly null
    Null,
    /// The count was below zero
    Negative(i64),
}

impl fmt::Display for ArgumentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentReason::Undefined => f.write_str("number is undefined"),
            ArgumentReason::Null => f.write_str("number is null"),
            ArgumentReason::Negative(_) => f.write_str("number is negative"),
        }
    }
}

/// Error type for trace construction and queries
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// Malformed raw step input
    #[error("{} {reason}", subject(.side, "array"))]
    Validation {
        /// Side that failed first, for two-sided builders
        side: Option<Side>,
        /// Exact cause
        reason: ValidationReason,
    },

    /// A variant tag outside `Empty`/`Cons`/`Union`
    #[error("invalid cons on {}: '{tag}'", subject(.side, "trace"))]
    InvalidVariant {
        /// Side holding the unrecognized tag
        side: Option<Side>,
        /// The tag as found
        tag: String,
    },

    /// Bad count passed to prefix extraction
    #[error("{reason}")]
    Argument {
        /// Exact cause
        reason: ArgumentReason,
    },

    /// A required trace argument was not supplied
    #[error("{} is undefined", subject(.side, "trace"))]
    UndefinedTrace {
        /// Side that was missing, for two-sided operations
        side: Option<Side>,
    },
}

fn subject(side: &Option<Side>, noun: &str) -> String {
    match side {
        Some(side) => format!("{} {}", side, noun),
        None => noun.to_string(),
    }
}

impl TraceError {
    /// Shorthand for a validation failure
    pub fn validation(side: Option<Side>, reason: ValidationReason) -> Self {
        TraceError::Validation { side, reason }
    }

    /// Shorthand for an undefined-trace failure
    pub fn undefined(side: Option<Side>) -> Self {
        TraceError::UndefinedTrace { side }
    }

    /// Check if this is a step-sequence validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, TraceError::Validation { .. })
    }

    /// Check if this is an unrecognized-variant failure
    pub fn is_invalid_variant(&self) -> bool {
        matches!(self, TraceError::InvalidVariant { .. })
    }

    /// Check if this is a bad-count failure
    pub fn is_argument(&self) -> bool {
        matches!(self, TraceError::Argument { .. })
    }

    /// The side this error names, if any
    pub fn side(&self) -> Option<Side> {
        match self {
            TraceError::Validation { side, .. }
            | TraceError::InvalidVariant { side, .. }
            | TraceError::UndefinedTrace { side } => *side,
            TraceError::Argument { .. } => None,
        }
    }
}

/// Result type alias for trace operations
pub type TraceResult<T> = Result<T, TraceError>;
