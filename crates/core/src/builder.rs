//! Validated trace construction
//!
//! Raw step sequences arrive from the execution recorder and are checked by a
//! single validator before any tree is built. Rules are checked in this order,
//! and the first violated rule is reported:
//!
//! 1. container is null
//! 2. container is undefined
//! 3. an element is null
//! 4. an element is undefined
//! 5. container is empty
//!
//! [`build_union`] checks its first side completely before looking at the
//! second, so an error on the first side always wins.

use std::sync::Arc;

use tracing::debug;

use crate::error::{Side, TraceError, TraceResult, ValidationReason};
use crate::input::{Input, RawStep};
use crate::trace::{StepLabel, TraceTree};

/// Check one raw step sequence and return its labels
pub fn validate_steps<'a>(
    steps: Input<&'a [RawStep]>,
    side: Option<Side>,
) -> TraceResult<Vec<&'a StepLabel>> {
    let reason = match steps {
        Input::Null => Some(ValidationReason::NullContainer),
        Input::Undefined => Some(ValidationReason::UndefinedContainer),
        Input::Value(items) if items.iter().any(Input::is_null) => {
            Some(ValidationReason::NullElement)
        }
        Input::Value(items) if items.iter().any(Input::is_undefined) => {
            Some(ValidationReason::UndefinedElement)
        }
        Input::Value([]) => Some(ValidationReason::Empty),
        Input::Value(_) => None,
    };

    if let Some(reason) = reason {
        debug!(side = ?side, %reason, "rejected raw step sequence");
        return Err(TraceError::validation(side, reason));
    }

    let labels = steps
        .value()
        .unwrap_or_default()
        .iter()
        .filter_map(|step| match step {
            Input::Value(label) => Some(label),
            _ => None,
        })
        .collect();
    Ok(labels)
}

/// Build a simple (`Cons`-only) trace from a raw step sequence
///
/// The last step becomes the root; the first step sits innermost.
pub fn build_from_steps(steps: Input<&[RawStep]>) -> TraceResult<TraceTree> {
    let labels = validate_steps(steps, None)?;
    Ok(chain(labels.into_iter().cloned()))
}

/// Build a `Union` of two simple traces
pub fn build_union(first: Input<&[RawStep]>, second: Input<&[RawStep]>) -> TraceResult<TraceTree> {
    let first = validate_steps(first, Some(Side::First))?;
    let second = validate_steps(second, Some(Side::Second))?;

    Ok(TraceTree::fork(
        chain(first.into_iter().cloned()),
        chain(second.into_iter().cloned()),
    ))
}

/// Fold labels oldest-first into nested `Cons` nodes
fn chain(labels: impl IntoIterator<Item = StepLabel>) -> TraceTree {
    labels.into_iter().fold(TraceTree::Empty, |rest, label| TraceTree::Cons {
        label,
        rest: Arc::new(rest),
    })
}

impl TraceTree {
    /// Build a simple trace from plain step identifiers
    ///
    /// Only emptiness can be violated here; null and undefined steps are
    /// unrepresentable in a plain slice.
    pub fn from_steps<I, S>(steps: I) -> TraceResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<StepLabel>,
    {
        let labels: Vec<StepLabel> = steps.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            debug!("rejected empty step sequence");
            return Err(TraceError::validation(None, ValidationReason::Empty));
        }
        Ok(chain(labels))
    }

    /// Build a `Union` of two simple traces from plain step identifiers
    pub fn union_of<A, B, S>(first: A, second: B) -> TraceResult<Self>
    where
        A: IntoIterator<Item = S>,
        B: IntoIterator<Item = S>,
        S: Into<StepLabel>,
    {
        let side = |side| {
            move |err: TraceError| match err {
                TraceError::Validation { reason, .. } => TraceError::validation(Some(side), reason),
                other => other,
            }
        };
        let first = Self::from_steps(first).map_err(side(Side::First))?;
        let second = Self::from_steps(second).map_err(side(Side::Second))?;
        Ok(Self::fork(first, second))
    }
}
