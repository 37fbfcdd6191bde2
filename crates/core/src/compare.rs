//! Structural equality over trace trees
//!
//! ## Equality Rules
//!
//! - `Empty == Empty`
//! - `Empty` never equals a non-empty trace
//! - `Cons` vs `Cons`: equal labels AND equal tails
//! - `Union` vs `Union`: left with left AND right with right (not commutative)
//! - Different variants are never equal
//!
//! Unrecognized tags cannot exist in a [`TraceTree`]; they are rejected with
//! `InvalidVariant` when tagged input is decoded.

use crate::error::{Side, TraceError, TraceResult};
use crate::trace::TraceTree;

impl PartialEq for TraceTree {
    fn eq(&self, other: &Self) -> bool {
        // Pairs still to compare; Cons chains are followed in place.
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            // Shared sub-trees compare equal without walking them.
            if std::ptr::eq(a, b) {
                continue;
            }
            match (a, b) {
                (TraceTree::Empty, TraceTree::Empty) => {}
                (
                    TraceTree::Cons { label: a, rest: a_rest },
                    TraceTree::Cons { label: b, rest: b_rest },
                ) => {
                    if a != b {
                        return false;
                    }
                    pending.push((a_rest.as_ref(), b_rest.as_ref()));
                }
                (
                    TraceTree::Union { left: a_left, right: a_right },
                    TraceTree::Union { left: b_left, right: b_right },
                ) => {
                    pending.push((a_right.as_ref(), b_right.as_ref()));
                    pending.push((a_left.as_ref(), b_left.as_ref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for TraceTree {}

/// Compare two possibly-undefined traces
///
/// An undefined argument is an error naming its side; the first side is
/// checked first.
pub fn equals(first: Option<&TraceTree>, second: Option<&TraceTree>) -> TraceResult<bool> {
    let first = first.ok_or_else(|| TraceError::undefined(Some(Side::First)))?;
    let second = second.ok_or_else(|| TraceError::undefined(Some(Side::Second)))?;
    Ok(first == second)
}
