//! Trace highlighting
//!
//! Highlighting decorates every composite node of a program tree with a
//! boolean flag correlated against the currently selected trace.
//!
//! | Selection | Forward | Backward |
//! |-----------|---------|----------|
//! | undefined | all `false` | all `false` |
//! | `Empty` | all `false` | all `false` |
//! | non-empty | `origin` contains selection | all `false` |
//!
//! An `Empty` selection highlights nothing even though the empty trace is
//! contained in every trace: no selection, no highlight.

use serde::{Deserialize, Serialize};
use tracemark_core::{query, TraceTree};
use tracing::debug;

use crate::decorate::decorate;
use crate::node::Node;

/// Field name carrying the highlight flag
pub const HIGHLIGHT_FIELD: &str = "isHighlighted";

/// Which relation between selection and node origin is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchDirection {
    /// Nodes whose origin trace contains the selection
    #[default]
    Forward,
    /// Unspecified; currently highlights nothing
    Backward,
}

/// Highlight nodes whose origin trace contains `selected`
pub fn forward_matching(selected: Option<&TraceTree>, tree: &Node) -> Node {
    forward_matching_as(HIGHLIGHT_FIELD, selected, tree)
}

/// Stub counterpart of [`forward_matching`]
///
/// The intended relation (ancestor or reachability) is unspecified. Until it
/// is decided every node is decorated `false`.
pub fn backward_matching(selected: Option<&TraceTree>, tree: &Node) -> Node {
    backward_matching_as(HIGHLIGHT_FIELD, selected, tree)
}

/// Highlight `tree` in the given direction
pub fn highlight(direction: MatchDirection, selected: Option<&TraceTree>, tree: &Node) -> Node {
    highlight_as(HIGHLIGHT_FIELD, direction, selected, tree)
}

pub(crate) fn highlight_as(
    field: &str,
    direction: MatchDirection,
    selected: Option<&TraceTree>,
    tree: &Node,
) -> Node {
    match direction {
        MatchDirection::Forward => forward_matching_as(field, selected, tree),
        MatchDirection::Backward => backward_matching_as(field, selected, tree),
    }
}

fn forward_matching_as(field: &str, selected: Option<&TraceTree>, tree: &Node) -> Node {
    match selected {
        Some(selection) if !selection.is_empty() => {
            debug!(field, steps = selection.len(), "forward matching");
            decorate(
                field,
                |node| Node::from(query::contains(Some(selection), node.origin())),
                tree,
            )
        }
        _ => decorate(field, |_| Node::from(false), tree),
    }
}

fn backward_matching_as(field: &str, _selected: Option<&TraceTree>, tree: &Node) -> Node {
    // TODO: decide the backward relation (ancestors of the selection or nodes
    // reachable from it) before highlighting anything here.
    decorate(field, |_| Node::from(false), tree)
}
