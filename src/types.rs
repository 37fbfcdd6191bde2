//! Public types for the tracemark API.
//!
//! This module re-exports types from the member crates with one import path.

// Trace types
pub use tracemark_core::{StepLabel, TraceKind, TraceTree};

// Raw step input
pub use tracemark_core::{raw_steps, step, Input, RawStep};

// Error details
pub use tracemark_core::{ArgumentReason, Side, TraceError, ValidationReason};
pub use tracemark_wire::DecodeError;

// Program trees
pub use tracemark_decorate::{Node, Record, Scalar, Sequence};

// Highlighting
pub use tracemark_decorate::{HighlightConfig, Highlighter, MatchDirection, HIGHLIGHT_FIELD};
