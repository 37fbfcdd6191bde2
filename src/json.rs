//! One-call operations over JSON values.
//!
//! These functions accept the shapes produced by the evaluator and selection
//! collaborators (`serde_json::Value`), run the trace algebra, and return
//! typed results or JSON ready for rendering. `None` stands for an absent
//! (undefined) argument, distinct from JSON `null`.

use serde_json::Value;
use tracemark_core::{build_from_steps, build_union, TraceTree};
use tracemark_decorate::{HighlightConfig, Highlighter};
use tracemark_wire::{
    decode_node, decode_steps, decode_trace, encode_node, equals_tagged, ORIGIN_KEY, SEQUENCE_KEY,
};
use tracing::debug;

use crate::error::{Error, Result};

/// Keys the JSON encoding of a program tree already uses
const RESERVED_FIELDS: [&str; 2] = [ORIGIN_KEY, SEQUENCE_KEY];

/// Reject a configuration whose flags would collide with the encoding.
pub(crate) fn check_config(config: &HighlightConfig) -> Result<()> {
    if RESERVED_FIELDS.contains(&config.field.as_str()) {
        debug!(field = %config.field, "rejected reserved decoration field");
        return Err(Error::Config(format!(
            "decoration field '{}' is reserved",
            config.field
        )));
    }
    Ok(())
}

/// Build a simple trace from a JSON step array.
///
/// ```
/// use serde_json::json;
/// use tracemark::{trace_from_json, TraceTree};
///
/// let trace = trace_from_json(Some(&json!([1, 9, 1, 13]))).unwrap();
/// assert_eq!(trace.len(), 4);
/// assert_eq!(trace.first_n(1), TraceTree::from_steps([1]).unwrap());
/// ```
pub fn trace_from_json(steps: Option<&Value>) -> Result<TraceTree> {
    let steps = decode_steps(steps)?;
    Ok(build_from_steps(steps.as_ref().map(Vec::as_slice))?)
}

/// Build a `Union` from two JSON step arrays.
///
/// The first array is validated in full before the second.
pub fn union_from_json(first: Option<&Value>, second: Option<&Value>) -> Result<TraceTree> {
    let first = decode_steps(first)?;
    let second = decode_steps(second)?;
    Ok(build_union(
        first.as_ref().map(Vec::as_slice),
        second.as_ref().map(Vec::as_slice),
    )?)
}

/// Compare two tagged JSON traces.
pub fn equals_json(first: Option<&Value>, second: Option<&Value>) -> Result<bool> {
    Ok(equals_tagged(first, second)?)
}

/// Decode a selection and a program tree, highlight, and encode the result.
///
/// `selected = None` means nothing is selected; every composite node is
/// flagged `false`. A decoration field named `"tra"` or `"$seq"` is
/// rejected with [`Error::Config`].
pub fn highlight_json(
    selected: Option<&Value>,
    tree: &Value,
    config: &HighlightConfig,
) -> Result<Value> {
    check_config(config)?;
    let selected = selected
        .map(|value| decode_trace(value, None))
        .transpose()?;
    let tree = decode_node(tree)?;

    debug!(
        field = %config.field,
        direction = ?config.direction,
        selected = selected.is_some(),
        nodes = tree.composite_count(),
        "highlighting program tree"
    );

    let decorated = Highlighter::new(config.clone()).apply(selected.as_ref(), &tree);
    Ok(encode_node(&decorated))
}
