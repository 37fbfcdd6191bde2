//! Wire Boundary Tests
//!
//! JSON in, JSON out: step arrays, tagged traces and their failure modes.

use crate::*;
use tracemark::prelude::*;
use tracemark::{length, Side};

// =============================================================================
// STEP ARRAYS
// =============================================================================

#[test]
fn test_steps_build_newest_outermost() {
    let trace = trace_from_json(Some(&json!([1, 9, 1, 13]))).expect("valid steps");
    assert_eq!(tracemark::encode_trace(&trace), tagged(&[1, 9, 1, 13]));
    assert_eq!(length(Some(&trace)), Ok(4));
    assert_eq!(tracemark::encode_trace(&trace.first_n(1)), tagged(&[1]));
    assert_eq!(trace.first_n(4), trace);
}

#[test]
fn test_numeral_strings_equal_numbers() {
    let numbers = trace_from_json(Some(&json!([1, 13]))).expect("valid steps");
    let strings = trace_from_json(Some(&json!(["1", "13"]))).expect("valid steps");
    assert_eq!(numbers, strings);
}

#[test]
fn test_union_of_step_arrays() {
    let trace = union_from_json(Some(&json!([1])), Some(&json!([2]))).expect("valid steps");
    assert_eq!(tracemark::encode_trace(&trace), tagged_union(&[1], &[2]));
    assert_eq!(length(Some(&trace)), Ok(1));
}

#[test]
fn test_step_validation_messages() {
    init_tracing();
    let cases = vec![
        (None, "array is undefined"),
        (Some(Value::Null), "array is null"),
        (Some(json!([1, null])), "array contains null values"),
        (Some(json!([])), "array is empty"),
    ];
    for (input, message) in cases {
        let err = trace_from_json(input.as_ref()).expect_err("must fail");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn test_union_validates_first_side_before_second() {
    let err = union_from_json(Some(&json!([])), None).expect_err("must fail");
    assert_eq!(err.to_string(), "first array is empty");

    let err = union_from_json(Some(&json!([1])), Some(&json!([null]))).expect_err("must fail");
    assert_eq!(err.to_string(), "second array contains null values");
    assert_eq!(err.side(), Some(Side::Second));
}

// =============================================================================
// TAGGED TRACES
// =============================================================================

#[test]
fn test_tagged_equality() {
    let a = tagged(&[1, 9]);
    assert_eq!(equals_json(Some(&a), Some(&tagged(&[1, 9]))), Ok(true));
    assert_eq!(equals_json(Some(&a), Some(&tagged(&[9, 1]))), Ok(false));
    assert_eq!(equals_json(Some(&Value::Null), Some(&a)), Ok(false));
    assert_eq!(
        equals_json(Some(&tagged_union(&[1], &[2])), Some(&tagged_union(&[2], &[1]))),
        Ok(false)
    );
}

#[test]
fn test_tagged_equality_names_undefined_side() {
    let err = equals_json(None, Some(&tagged(&[1]))).expect_err("must fail");
    assert_eq!(err.to_string(), "first trace is undefined");

    let err = equals_json(Some(&tagged(&[1])), None).expect_err("must fail");
    assert_eq!(err.to_string(), "second trace is undefined");
}

#[test]
fn test_invalid_variant_is_never_false() {
    let invalid = json!({"cons": "Cons", "num": "1", "trace": {"cons": "Invalid"}});

    let err = equals_json(Some(&tagged(&[1])), Some(&invalid)).expect_err("must fail");
    assert!(err.is_invalid_variant());
    assert_eq!(err.to_string(), "invalid cons on second trace: 'Invalid'");

    let err = equals_json(Some(&invalid), Some(&tagged(&[1]))).expect_err("must fail");
    assert_eq!(err.side(), Some(Side::First));
}

#[test]
fn test_malformed_selection_fails_highlighting() {
    let err = highlight_json(Some(&json!({"cons": "Cons"})), &program(), &HighlightConfig::default())
        .expect_err("must fail");
    assert!(err.is_malformed());

    let err = highlight_json(Some(&json!([1, 9])), &program(), &HighlightConfig::default())
        .expect_err("a step array is not a trace");
    assert!(err.is_malformed());
}

#[test]
fn test_invalid_origin_in_tree_fails_highlighting() {
    let tree = json!({"cons": "Prog", "exps": [{"name": "x", "tra": {"cons": "Loop"}}]});
    let err = highlight_json(Some(&tagged(&[1])), &tree, &HighlightConfig::default())
        .expect_err("must fail");
    assert!(err.is_invalid_variant());
    assert_eq!(err.to_string(), "invalid cons on trace: 'Loop'");
}
