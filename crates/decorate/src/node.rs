//! Program-tree document model
//!
//! A program tree is a heterogeneous document mixing ordered sequences and
//! keyed records. Decoration is driven by this shape:
//!
//! 1. `Leaf` - a scalar; never decorated
//! 2. `Sequence` - ordered children plus attached annotations
//! 3. `Record` - named fields plus a reserved origin-trace slot
//!
//! The origin trace lives in its own typed slot on [`Record`], never among the
//! named fields, so walkers cannot descend into it by accident.
//!
//! ## Equality Rules
//!
//! - Different scalar types are NEVER equal (`Int(1)` != `Float(1.0)`)
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use std::collections::BTreeMap;
use tracemark_core::TraceTree;

use crate::matching::HIGHLIGHT_FIELD;

/// Scalar leaf of a program tree
#[derive(Debug, Clone)]
pub enum Scalar {
    /// Absence of value
    Null,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// Unsigned integer above `i64::MAX`
    UInt(u64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// UTF-8 encoded string
    String(String),
}

impl Scalar {
    /// Returns the type name as a string (for logs and error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "Null",
            Scalar::Bool(_) => "Bool",
            Scalar::Int(_) => "Int",
            Scalar::UInt(_) => "UInt",
            Scalar::Float(_) => "Float",
            Scalar::String(_) => "String",
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::UInt(a), Scalar::UInt(b)) => a == b,
            // IEEE-754 equality: NaN != NaN, but -0.0 == 0.0
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::String(a), Scalar::String(b)) => a == b,

            // Different types: NEVER equal (NO TYPE COERCION)
            _ => false,
        }
    }
}

/// Ordered children with annotations attached by decoration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    /// Child nodes in order
    pub items: Vec<Node>,
    /// Named annotations attached to the sequence itself
    pub annotations: BTreeMap<String, Node>,
}

impl Sequence {
    /// Create a sequence with no annotations
    pub fn new(items: Vec<Node>) -> Self {
        Self {
            items,
            annotations: BTreeMap::new(),
        }
    }
}

/// Keyed record with a reserved origin-trace slot
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Domain fields, opaque to the decorator except for recursion
    pub fields: BTreeMap<String, Node>,
    /// Trace that produced this node; `None` when the node has no origin
    pub origin: Option<TraceTree>,
}

impl Record {
    /// Create an empty record with no origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Node>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set the origin trace
    pub fn with_origin(mut self, origin: TraceTree) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// A node of a program-representation tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Scalar leaf
    Leaf(Scalar),
    /// Ordered sequence
    Sequence(Sequence),
    /// Keyed record
    Record(Record),
}

impl Node {
    /// The null leaf
    pub fn null() -> Self {
        Node::Leaf(Scalar::Null)
    }

    /// Build a sequence node
    pub fn sequence(items: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(Sequence::new(items.into_iter().collect()))
    }

    /// Returns the shape name as a string (for logs and error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Leaf(scalar) => scalar.type_name(),
            Node::Sequence(_) => "Sequence",
            Node::Record(_) => "Record",
        }
    }

    /// Check if this node can carry decorations
    pub fn is_composite(&self) -> bool {
        !matches!(self, Node::Leaf(_))
    }

    /// Try to get as a scalar
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Leaf(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Leaf(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Leaf(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Try to get as sequence
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Try to get as record
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Node::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Origin trace of a record; `None` for anything without one
    pub fn origin(&self) -> Option<&TraceTree> {
        match self {
            Node::Record(record) => record.origin.as_ref(),
            _ => None,
        }
    }

    /// Record field or sequence annotation by name
    pub fn get(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Leaf(_) => None,
            Node::Sequence(seq) => seq.annotations.get(name),
            Node::Record(record) => record.fields.get(name),
        }
    }

    /// Boolean decoration by name
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Node::as_bool)
    }

    /// Whether the default `isHighlighted` flag is present and `true`
    ///
    /// Always `false` for trees decorated into another field; use
    /// [`Highlighter::is_highlighted`](crate::Highlighter::is_highlighted)
    /// or [`Node::flag`] for those.
    pub fn is_highlighted(&self) -> bool {
        self.flag(HIGHLIGHT_FIELD).unwrap_or(false)
    }

    /// Direct children, excluding the origin slot
    pub fn children(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        match self {
            Node::Leaf(_) => Box::new(std::iter::empty()),
            Node::Sequence(seq) => Box::new(seq.items.iter().chain(seq.annotations.values())),
            Node::Record(record) => Box::new(record.fields.values()),
        }
    }

    /// Number of composite nodes in this tree
    pub fn composite_count(&self) -> usize {
        if !self.is_composite() {
            return 0;
        }
        1 + self.children().map(Node::composite_count).sum::<usize>()
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Leaf(scalar)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Leaf(Scalar::Bool(b))
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Leaf(Scalar::Int(i))
    }
}

impl From<u64> for Node {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => Node::Leaf(Scalar::Int(i)),
            Err(_) => Node::Leaf(Scalar::UInt(u)),
        }
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Leaf(Scalar::Float(f))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Leaf(Scalar::String(s.to_string()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Leaf(Scalar::String(s))
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Sequence(Sequence::new(items))
    }
}

impl From<Sequence> for Node {
    fn from(seq: Sequence) -> Self {
        Node::Sequence(seq)
    }
}

impl From<Record> for Node {
    fn from(record: Record) -> Self {
        Node::Record(record)
    }
}
