//! Backward Matching Tests
//!
//! Backward matching has no defined relation yet; it must decorate every
//! composite node `false` without touching anything else.

use crate::*;
use tracemark::prelude::*;

fn backward() -> HighlightConfig {
    HighlightConfig::new().with_direction(MatchDirection::Backward)
}

#[test]
fn test_backward_flags_every_node_false() {
    init_tracing();
    for selection in [tagged(&[1]), tagged(&[1, 9]), Value::Null] {
        let out = highlight_json(Some(&selection), &program(), &backward())
            .expect("highlight should succeed");
        assert!(highlighted(&out).is_empty(), "selection {}", selection);
        assert_eq!(flags(&out).len(), 5);
        assert_eq!(out["isHighlighted"], json!(false));
    }
}

#[test]
fn test_backward_without_selection() {
    let out = highlight_json(None, &program(), &backward()).expect("highlight should succeed");
    assert!(highlighted(&out).is_empty());
}

#[test]
fn test_backward_preserves_origins() {
    let out = highlight_json(Some(&tagged(&[1])), &program(), &backward())
        .expect("highlight should succeed");
    assert_eq!(out["exps"]["$seq"][0]["tra"], tagged(&[1]));
}

#[test]
fn test_backward_still_rejects_malformed_selection() {
    let err = highlight_json(Some(&json!({"cons": "Bogus"})), &program(), &backward())
        .expect_err("unknown tag must fail");
    assert!(err.is_invalid_variant());
}
