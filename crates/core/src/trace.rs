//! The trace tree
//!
//! A [`TraceTree`] records one path through a nondeterministically branching
//! evaluator. The root is always the most recently recorded step and depth
//! grows toward earlier steps:
//!
//! ```text
//! steps [1, 9, 13]  =>  Cons("13", Cons("9", Cons("1", Empty)))
//! ```
//!
//! A `Union` holds two continuations tracked at the same time. Trees are never
//! mutated after construction, so sub-trees are shared behind [`Arc`].

use std::fmt;
use std::sync::Arc;

/// Decimal-string identifier of a single recorded evaluation step
///
/// Numbers render in decimal; strings are taken as given, so `1` and `"1"`
/// produce the same label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepLabel(String);

impl StepLabel {
    /// Create a label from any displayable step identifier
    pub fn new(label: impl Into<String>) -> Self {
        StepLabel(label.into())
    }

    /// Borrow the label text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! impl_label_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StepLabel {
                fn from(step: $ty) -> Self {
                    StepLabel(step.to_string())
                }
            }
        )*
    };
}

impl_label_from_int!(i32, i64, u32, u64, usize);

impl From<&str> for StepLabel {
    fn from(step: &str) -> Self {
        StepLabel(step.to_string())
    }
}

impl From<String> for StepLabel {
    fn from(step: String) -> Self {
        StepLabel(step)
    }
}

/// Variant tag of a [`TraceTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceKind {
    /// No recorded steps
    Empty,
    /// One step plus the earlier remainder
    Cons,
    /// Fork into two concurrent continuations
    Union,
}

impl TraceKind {
    /// Canonical tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceKind::Empty => "Empty",
            TraceKind::Cons => "Cons",
            TraceKind::Union => "Union",
        }
    }

    /// Parse a tag name, returning `None` for anything unrecognized
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Empty" => Some(TraceKind::Empty),
            "Cons" => Some(TraceKind::Cons),
            "Union" => Some(TraceKind::Union),
            _ => None,
        }
    }
}

/// Immutable record of execution provenance
///
/// Equality is structural (see the comparator module); it is order-sensitive
/// for `Union`.
#[derive(Debug, Clone, Default)]
pub enum TraceTree {
    /// No recorded steps
    #[default]
    Empty,

    /// One recorded step wrapping everything recorded before it
    Cons {
        /// The step recorded last
        label: StepLabel,
        /// Steps recorded earlier
        rest: Arc<TraceTree>,
    },

    /// Two concurrently tracked continuations
    Union {
        /// First continuation
        left: Arc<TraceTree>,
        /// Second continuation
        right: Arc<TraceTree>,
    },
}

impl TraceTree {
    /// The empty trace
    pub fn empty() -> Self {
        TraceTree::Empty
    }

    /// Prepend a step to an existing trace
    pub fn cons(label: impl Into<StepLabel>, rest: TraceTree) -> Self {
        TraceTree::Cons {
            label: label.into(),
            rest: Arc::new(rest),
        }
    }

    /// Fork two continuations into a single binary node
    pub fn fork(left: TraceTree, right: TraceTree) -> Self {
        TraceTree::Union {
            left: Arc::new(left),
            right: Arc::new(right),
        }
    }

    /// Variant tag of this node
    pub fn kind(&self) -> TraceKind {
        match self {
            TraceTree::Empty => TraceKind::Empty,
            TraceTree::Cons { .. } => TraceKind::Cons,
            TraceTree::Union { .. } => TraceKind::Union,
        }
    }

    /// Check if this is the empty trace
    pub fn is_empty(&self) -> bool {
        matches!(self, TraceTree::Empty)
    }

    /// Check if this node is a `Cons`
    pub fn is_cons(&self) -> bool {
        matches!(self, TraceTree::Cons { .. })
    }

    /// Check if this node is a `Union`
    pub fn is_union(&self) -> bool {
        matches!(self, TraceTree::Union { .. })
    }

    /// Label of a `Cons` node
    pub fn label(&self) -> Option<&StepLabel> {
        match self {
            TraceTree::Cons { label, .. } => Some(label),
            _ => None,
        }
    }

    /// Tail of a `Cons` node
    pub fn rest(&self) -> Option<&TraceTree> {
        match self {
            TraceTree::Cons { rest, .. } => Some(rest.as_ref()),
            _ => None,
        }
    }

    /// Both branches of a `Union` node
    pub fn branches(&self) -> Option<(&TraceTree, &TraceTree)> {
        match self {
            TraceTree::Union { left, right } => Some((left.as_ref(), right.as_ref())),
            _ => None,
        }
    }

    /// Labels in chronological order, if the trace contains no `Union`
    pub fn steps(&self) -> Option<Vec<&StepLabel>> {
        let mut labels = Vec::new();
        let mut node = self;
        loop {
            match node {
                TraceTree::Empty => break,
                TraceTree::Cons { label, rest } => {
                    labels.push(label);
                    node = rest.as_ref();
                }
                TraceTree::Union { .. } => return None,
            }
        }
        labels.reverse();
        Some(labels)
    }
}

// Unlinks uniquely owned sub-trees one at a time so that dropping a long
// chain does not recurse once per step.
impl Drop for TraceTree {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(child) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(child) {
                detach_children(&mut node, &mut pending);
            }
        }
    }
}

fn detach_children(node: &mut TraceTree, pending: &mut Vec<Arc<TraceTree>>) {
    match node {
        TraceTree::Empty => {}
        TraceTree::Cons { rest, .. } => detach(rest, pending),
        TraceTree::Union { left, right } => {
            detach(left, pending);
            detach(right, pending);
        }
    }
}

fn detach(slot: &mut Arc<TraceTree>, pending: &mut Vec<Arc<TraceTree>>) {
    if !slot.is_empty() {
        pending.push(std::mem::replace(slot, Arc::new(TraceTree::Empty)));
    }
}

impl fmt::Display for TraceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceTree::Empty => f.write_str("Empty"),
            TraceTree::Cons { label, rest } => write!(f, "Cons(\"{}\", {})", label, rest),
            TraceTree::Union { left, right } => write!(f, "Union({}, {})", left, right),
        }
    }
}
