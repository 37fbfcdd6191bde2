//! Convenient imports for tracemark.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use tracemark::prelude::*;
//!
//! let trace = trace_from_json(Some(&json!([1, 2]))).unwrap();
//! assert_eq!(trace, TraceTree::from_steps([1, 2]).unwrap());
//! ```

// Main entry point
pub use crate::tracemark::{Tracemark, TracemarkBuilder};

// Error handling
pub use crate::error::{Error, Result};

// JSON operations
pub use crate::json::{equals_json, highlight_json, trace_from_json, union_from_json};

// Core types
pub use crate::types::{Input, Node, Record, Sequence, StepLabel, TraceTree};

// Highlighting
pub use crate::types::{HighlightConfig, MatchDirection};

// Re-export serde_json for convenience
pub use serde_json::json;
