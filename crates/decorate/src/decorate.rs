//! Generic tree decoration
//!
//! [`decorate`] copies a program tree and attaches one computed field to
//! every composite node at every depth. The compute function always sees the
//! node as it was in the input, before any of its children were decorated.
//!
//! Recursion enters every record field, every sequence item and every
//! sequence annotation. It never enters a record's origin trace. Leaves are
//! copied unchanged. The input tree is never modified.

use tracing::trace;

use crate::node::{Node, Record, Sequence};

/// Attach `field = compute(node)` to every composite node of `tree`
///
/// An existing field or annotation of the same name is replaced.
pub fn decorate<F>(field: &str, compute: F, tree: &Node) -> Node
where
    F: Fn(&Node) -> Node,
{
    trace!(field, root = tree.type_name(), "decorating tree");
    decorate_node(field, &compute, tree)
}

fn decorate_node<F>(field: &str, compute: &F, node: &Node) -> Node
where
    F: Fn(&Node) -> Node,
{
    match node {
        Node::Leaf(_) => node.clone(),
        Node::Sequence(seq) => {
            let mut decorated = Sequence {
                items: seq
                    .items
                    .iter()
                    .map(|item| decorate_node(field, compute, item))
                    .collect(),
                annotations: seq
                    .annotations
                    .iter()
                    .map(|(name, value)| (name.clone(), decorate_node(field, compute, value)))
                    .collect(),
            };
            decorated.annotations.insert(field.to_string(), compute(node));
            Node::Sequence(decorated)
        }
        Node::Record(record) => {
            let mut decorated = Record {
                fields: record
                    .fields
                    .iter()
                    .map(|(name, value)| (name.clone(), decorate_node(field, compute, value)))
                    .collect(),
                origin: record.origin.clone(),
            };
            decorated.fields.insert(field.to_string(), compute(node));
            Node::Record(decorated)
        }
    }
}
