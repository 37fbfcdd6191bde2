//! Trace algebra for tracemark
//!
//! This crate defines the provenance trace of a nondeterministic evaluator and
//! every operation over it:
//! - [`TraceTree`]: the immutable `Empty` / `Cons` / `Union` tree
//! - [`builder`]: validated construction from raw step sequences
//! - [`compare`]: structural equality
//! - [`query`]: containment, length and prefix extraction
//!
//! All operations are pure and synchronous. Trees are never mutated, so they
//! can be shared freely across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod compare;
pub mod error;
pub mod input;
pub mod query;
pub mod trace;

pub use builder::{build_from_steps, build_union, validate_steps};
pub use compare::equals;
pub use error::{ArgumentReason, Side, TraceError, TraceResult, ValidationReason};
pub use input::{raw_steps, step, Input, RawStep};
pub use query::{contains, first_n, length};
pub use trace::{StepLabel, TraceKind, TraceTree};
