//! JSON interchange for tracemark
//!
//! This crate converts between `serde_json` values and the trace and
//! program-tree types, using the shapes the evaluator emits:
//!
//! | Value | JSON Encoding |
//! |-------|--------------|
//! | Empty trace | `null` |
//! | Cons trace | `{"cons": "Cons", "num": "<label>", "trace": ...}` |
//! | Union trace | `{"cons": "Union", "trace1": ..., "trace2": ...}` |
//! | Record origin | `"tra": <trace>` |
//! | Annotated sequence | `{"$seq": [...], "<annotation>": ...}` |
//! | Raw steps | `[1, "13", null]` |
//!
//! ## Examples
//!
//! ```
//! use serde_json::json;
//! use tracemark_core::TraceTree;
//! use tracemark_wire::{decode_trace, encode_trace};
//!
//! let value = json!({"cons": "Cons", "num": "13", "trace": null});
//! let trace = decode_trace(&value, None).unwrap();
//! assert_eq!(trace, TraceTree::from_steps([13]).unwrap());
//! assert_eq!(encode_trace(&trace), value);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

pub use json::{
    decode_node, decode_steps, decode_trace, encode_error, encode_node, encode_trace,
    equals_tagged, DecodeError, ORIGIN_KEY, SEQUENCE_KEY,
};
