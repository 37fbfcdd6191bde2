//! Forward Matching Tests
//!
//! A node is highlighted when its origin trace contains the selected trace.

use crate::*;
use tracemark::prelude::*;

// =============================================================================
// SELECTION SEMANTICS
// =============================================================================

#[test]
fn test_selection_highlights_descendant_steps() {
    init_tracing();
    let out = highlight_json(Some(&tagged(&[1, 9])), &program(), &HighlightConfig::default())
        .expect("highlight should succeed");

    assert_eq!(highlighted(&out), vec!["Nil", "Cons", "Lit"]);
    assert_eq!(
        flags(&out),
        vec![
            ("Cons".to_string(), false),
            ("Nil".to_string(), true),
            ("Cons".to_string(), true),
            ("Lit".to_string(), true),
            ("Lit".to_string(), false),
        ]
    );
}

#[test]
fn test_root_step_highlights_everything_below_it() {
    let out = highlight_json(Some(&tagged(&[1])), &program(), &HighlightConfig::default())
        .expect("highlight should succeed");
    assert_eq!(highlighted(&out), vec!["Cons", "Nil", "Cons", "Lit"]);
}

#[test]
fn test_unrelated_selection_highlights_nothing() {
    let out = highlight_json(Some(&tagged(&[7])), &program(), &HighlightConfig::default())
        .expect("highlight should succeed");
    assert!(highlighted(&out).is_empty());
    assert_eq!(flags(&out).len(), 5);
}

#[test]
fn test_selection_must_match_from_the_oldest_step() {
    // [9] alone is not a suffix chain of [1, 9]
    let out = highlight_json(Some(&tagged(&[9])), &program(), &HighlightConfig::default())
        .expect("highlight should succeed");
    assert!(highlighted(&out).is_empty());
}

#[test]
fn test_union_origin_contains_either_branch() {
    let tree = json!({
        "cons": "Item",
        "name": "Forked",
        "args": [],
        "tra": tagged_union(&[1, 2], &[3])
    });

    for selection in [tagged(&[1, 2]), tagged(&[1]), tagged(&[3])] {
        let out = highlight_json(Some(&selection), &tree, &HighlightConfig::default())
            .expect("highlight should succeed");
        assert_eq!(out["isHighlighted"], json!(true), "selection {}", selection);
    }

    let out = highlight_json(Some(&tagged(&[2])), &tree, &HighlightConfig::default())
        .expect("highlight should succeed");
    assert_eq!(out["isHighlighted"], json!(false));
}

// =============================================================================
// EMPTY AND ABSENT SELECTIONS
// =============================================================================

#[test]
fn test_empty_selection_highlights_nothing() {
    let out = highlight_json(Some(&Value::Null), &program(), &HighlightConfig::default())
        .expect("highlight should succeed");
    assert!(highlighted(&out).is_empty());
    // The root's origin is Empty, which an Empty selection would match vacuously
    assert_eq!(out["isHighlighted"], json!(false));
}

#[test]
fn test_absent_selection_highlights_nothing() {
    let out = highlight_json(None, &program(), &HighlightConfig::default())
        .expect("highlight should succeed");
    assert!(highlighted(&out).is_empty());
    assert_eq!(flags(&out).len(), 5);
}

// =============================================================================
// STRUCTURE PRESERVATION
// =============================================================================

#[test]
fn test_origins_survive_decoration() {
    let input = program();
    let out = highlight_json(Some(&tagged(&[1, 9])), &input, &HighlightConfig::default())
        .expect("highlight should succeed");

    assert_eq!(out["tra"], Value::Null);
    let outer = &out["exps"]["$seq"][0];
    assert_eq!(outer["tra"], tagged(&[1]));
    assert_eq!(outer["args"]["$seq"][1]["tra"], tagged(&[1, 9, 1, 13]));
    // No flag is written inside an origin trace
    assert!(outer["tra"].get("isHighlighted").is_none());
}

#[test]
fn test_sequences_carry_their_own_flag() {
    let out = highlight_json(Some(&tagged(&[1])), &program(), &HighlightConfig::default())
        .expect("highlight should succeed");
    assert_eq!(out["exps"]["isHighlighted"], json!(false));
    assert!(out["exps"]["$seq"].is_array());
}

#[test]
fn test_leaves_and_domain_fields_unchanged() {
    let out = highlight_json(Some(&tagged(&[2])), &program(), &HighlightConfig::default())
        .expect("highlight should succeed");
    let lit = &out["exps"]["$seq"][0]["args"]["$seq"][2];
    assert_eq!(lit["name"], json!("Lit"));
    assert_eq!(lit["cons"], json!("Item"));
    assert_eq!(lit["isHighlighted"], json!(true));
}

#[test]
fn test_typed_and_json_paths_agree() {
    let selection = trace_from_json(Some(&json!([1, 9]))).expect("valid steps");
    let tree = tracemark::decode_node(&program()).expect("valid tree");

    let typed = tracemark::encode_node(&tracemark::forward_matching(Some(&selection), &tree));
    let via_json = highlight_json(
        Some(&tracemark::encode_trace(&selection)),
        &program(),
        &HighlightConfig::default(),
    )
    .expect("highlight should succeed");

    assert_eq!(typed, via_json);
}
