//! # Tracemark
//!
//! Provenance traces for a nondeterministic evaluator, and highlighting of
//! program trees against a selected trace.
//!
//! A trace records which steps produced a value. Traces are built once from
//! raw step sequences, compared, queried, and finally used to flag every node
//! of a program-representation tree whose origin trace contains the trace the
//! user selected.
//!
//! ## Quick Start
//!
//! ```
//! use tracemark::prelude::*;
//!
//! // Build a trace from recorded steps; the last step is outermost
//! let selected = trace_from_json(Some(&json!([1, 9]))).unwrap();
//! assert_eq!(selected.len(), 2);
//!
//! // Highlight a program tree delivered as JSON
//! let tree = json!({
//!     "cons": "Prog",
//!     "exps": [
//!         {"cons": "Con", "tra": {"cons": "Cons", "num": "9", "trace": {"cons": "Cons", "num": "1", "trace": null}}},
//!         {"cons": "Con", "tra": {"cons": "Cons", "num": "2", "trace": null}}
//!     ]
//! });
//! let selection = json!({"cons": "Cons", "num": "9", "trace": {"cons": "Cons", "num": "1", "trace": null}});
//! let out = highlight_json(Some(&selection), &tree, &HighlightConfig::default()).unwrap();
//!
//! // Decorated sequences keep their items under "$seq"
//! assert_eq!(out["exps"]["$seq"][0]["isHighlighted"], json!(true));
//! assert_eq!(out["exps"]["$seq"][1]["isHighlighted"], json!(false));
//! ```
//!
//! ## Layers
//!
//! - [`tracemark_core`] - the trace algebra ([`TraceTree`], builders, queries)
//! - [`tracemark_decorate`] - program trees and highlighting ([`Node`])
//! - [`tracemark_wire`] - JSON interchange
//! - this crate - unified [`Error`], [`Tracemark`] and one-call JSON helpers

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod json;
mod tracemark;
mod types;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use json::{equals_json, highlight_json, trace_from_json, union_from_json};
pub use tracemark::{Tracemark, TracemarkBuilder};

// Re-export operations
pub use tracemark_core::{build_from_steps, build_union, contains, equals, first_n, length};
pub use tracemark_decorate::{backward_matching, decorate, forward_matching, highlight};
pub use tracemark_wire::{decode_node, decode_steps, decode_trace, encode_node, encode_trace};

// Re-export types
pub use types::*;
