//! Containment, length and prefix extraction
//!
//! The typed methods on [`TraceTree`] assume a present trace. The free
//! functions accept possibly-missing arguments the way selection collaborators
//! deliver them:
//!
//! | Operation | Undefined argument |
//! |-----------|--------------------|
//! | [`contains`] | `false` |
//! | [`length`] | error |
//! | [`first_n`] | error |
//!
//! ## Length
//!
//! A `Union` counts as exactly one step no matter how long its branches are:
//! the branches progress at the same time, so they are never summed.
//!
//! ## Prefixes
//!
//! The root of a trace is its most recent step, so the chronologically first
//! `n` steps are the innermost suffix of the tree. A `Union` is atomic and is
//! never partially unwrapped.

use crate::error::{ArgumentReason, TraceError, TraceResult};
use crate::input::Input;
use crate::trace::TraceTree;

impl TraceTree {
    /// Number of sequential steps, counting a `Union` as one
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut node = self;
        loop {
            match node {
                TraceTree::Empty => return count,
                TraceTree::Cons { rest, .. } => {
                    count += 1;
                    node = rest.as_ref();
                }
                TraceTree::Union { .. } => return count + 1,
            }
        }
    }

    /// Check whether `needle` occurs as a sub-trace of this trace
    ///
    /// The empty trace occurs everywhere.
    pub fn contains(&self, needle: &TraceTree) -> bool {
        if needle.is_empty() {
            return true;
        }

        let mut node = self;
        loop {
            if node == needle {
                return true;
            }
            match node {
                TraceTree::Empty => return false,
                TraceTree::Cons { rest, .. } => node = rest.as_ref(),
                TraceTree::Union { left, right } => {
                    return left.contains(needle) || right.contains(needle);
                }
            }
        }
    }

    /// The chronologically first `n` steps
    ///
    /// A count larger than the trace is clamped.
    pub fn first_n(&self, n: usize) -> TraceTree {
        if n == 0 {
            return TraceTree::Empty;
        }

        let mut node = self;
        let mut remaining = node.len();
        loop {
            if n >= remaining {
                return node.clone();
            }
            match node {
                TraceTree::Cons { rest, .. } => {
                    node = rest.as_ref();
                    remaining -= 1;
                }
                _ => return node.clone(),
            }
        }
    }
}

/// Check whether `needle` occurs in `haystack`
///
/// Never fails: either argument undefined yields `false`.
pub fn contains(needle: Option<&TraceTree>, haystack: Option<&TraceTree>) -> bool {
    match (needle, haystack) {
        (Some(needle), Some(haystack)) => haystack.contains(needle),
        _ => false,
    }
}

/// Number of sequential steps in a trace
pub fn length(trace: Option<&TraceTree>) -> TraceResult<usize> {
    trace
        .map(TraceTree::len)
        .ok_or_else(|| TraceError::undefined(None))
}

/// The chronologically first `n` steps of a trace
///
/// Fails when the trace is undefined, or when `n` is undefined, null or
/// negative.
pub fn first_n(trace: Option<&TraceTree>, n: Input<i64>) -> TraceResult<TraceTree> {
    let trace = trace.ok_or_else(|| TraceError::undefined(None))?;
    let n = match n {
        Input::Undefined => return Err(argument(ArgumentReason::Undefined)),
        Input::Null => return Err(argument(ArgumentReason::Null)),
        Input::Value(n) if n < 0 => return Err(argument(ArgumentReason::Negative(n))),
        Input::Value(n) => usize::try_from(n).unwrap_or(usize::MAX),
    };
    Ok(trace.first_n(n))
}

fn argument(reason: ArgumentReason) -> TraceError {
    tracing::debug!(%reason, "rejected prefix count");
    TraceError::Argument { reason }
}
