//! Program-tree decoration for tracemark
//!
//! This crate annotates program-representation trees with flags derived from
//! trace queries:
//! - [`node`]: the `Leaf` / `Sequence` / `Record` document model
//! - [`decorate`](mod@decorate): the generic, non-mutating decorator
//! - [`matching`]: forward and backward highlighting against a selected trace
//! - [`config`]: highlight settings and a reusable [`Highlighter`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod decorate;
pub mod matching;
pub mod node;

pub use config::{HighlightConfig, Highlighter};
pub use decorate::decorate;
pub use matching::{backward_matching, forward_matching, highlight, MatchDirection, HIGHLIGHT_FIELD};
pub use node::{Node, Record, Scalar, Sequence};
