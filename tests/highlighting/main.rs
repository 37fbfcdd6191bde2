//! Highlighting Test Suite
//!
//! End-to-end tests of trace-driven highlighting over JSON program trees, as
//! delivered by the evaluator and consumed by the view layer.
//!
//! ## Key Verification Points
//!
//! 1. Forward matching flags exactly the nodes whose origin contains the selection
//! 2. Empty and absent selections flag nothing
//! 3. Backward matching flags nothing
//! 4. Origin traces survive decoration untouched
//! 5. Malformed traces surface as errors, never as `false`
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test highlighting
//! cargo test --test highlighting forward::
//! ```

use serde_json::{json, Value};

// Test modules
pub mod backward;
pub mod config;
pub mod forward;
pub mod wire;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Route library logs to the test harness output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Tagged trace from steps in recording order
pub fn tagged(steps: &[u32]) -> Value {
    steps.iter().fold(Value::Null, |rest, step| {
        json!({"cons": "Cons", "num": step.to_string(), "trace": rest})
    })
}

/// Tagged union of two step sequences
pub fn tagged_union(left: &[u32], right: &[u32]) -> Value {
    json!({"cons": "Union", "trace1": tagged(left), "trace2": tagged(right)})
}

/// Item node `{name, args}` produced by the given steps
pub fn item(name: &str, args: Vec<Value>, steps: &[u32]) -> Value {
    json!({"cons": "Item", "name": name, "args": args, "tra": tagged(steps)})
}

/// A small presentation tree:
///
/// ```text
/// Cons [1]            root
/// ├── Nil [1, 9]
/// ├── Cons [1, 9, 1, 13]
/// │   └── Lit [1, 9, 1, 13, 2]
/// └── Lit [2]
/// ```
pub fn program() -> Value {
    json!({
        "cons": "Prog",
        "exps": [
            item("Cons", vec![
                item("Nil", vec![], &[1, 9]),
                item("Cons", vec![item("Lit", vec![], &[1, 9, 1, 13, 2])], &[1, 9, 1, 13]),
                item("Lit", vec![], &[2]),
            ], &[1]),
        ],
        "tra": null
    })
}

/// Every `isHighlighted` flag under `node`, keyed by `name`, depth-first
pub fn flags(node: &Value) -> Vec<(String, bool)> {
    let mut out = Vec::new();
    collect_flags(node, &mut out);
    out
}

fn collect_flags(node: &Value, out: &mut Vec<(String, bool)>) {
    match node {
        Value::Object(map) => {
            if let (Some(Value::String(name)), Some(Value::Bool(flag))) =
                (map.get("name"), map.get("isHighlighted"))
            {
                out.push((name.clone(), *flag));
            }
            for (key, value) in map {
                if key != "tra" {
                    collect_flags(value, out);
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect_flags(item, out)),
        _ => {}
    }
}

/// Names flagged `true`, in depth-first order
pub fn highlighted(node: &Value) -> Vec<String> {
    flags(node)
        .into_iter()
        .filter(|(_, flag)| *flag)
        .map(|(name, _)| name)
        .collect()
}
