//! Configuration Tests
//!
//! Settings select the flag field and the matching direction.

use crate::*;
use tracemark::prelude::*;

#[test]
fn test_custom_field_replaces_default() {
    let tm = Tracemark::builder().field("selected").build().unwrap();
    let out = tm
        .highlight_json(Some(&tagged(&[2])), &program())
        .expect("highlight should succeed");

    let lit = &out["exps"]["$seq"][0]["args"]["$seq"][2];
    assert_eq!(lit["selected"], json!(true));
    assert!(lit.get("isHighlighted").is_none());
    assert!(flags(&out).is_empty());
}

#[test]
fn test_settings_from_json() {
    let tm = Tracemark::from_settings(&json!({"direction": "backward"}))
        .expect("valid settings");
    assert_eq!(tm.config().field, "isHighlighted");

    let out = tm
        .highlight_json(Some(&tagged(&[1])), &program())
        .expect("highlight should succeed");
    assert!(highlighted(&out).is_empty());
}

#[test]
fn test_bad_settings_are_reported() {
    let err = Tracemark::from_settings(&json!({"direction": 3})).expect_err("must fail");
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_default_tracemark_matches_free_function() {
    let selection = tagged(&[1, 9]);
    let via_struct = Tracemark::new()
        .highlight_json(Some(&selection), &program())
        .expect("highlight should succeed");
    let via_fn = highlight_json(Some(&selection), &program(), &HighlightConfig::default())
        .expect("highlight should succeed");
    assert_eq!(via_struct, via_fn);
}

#[test]
fn test_redecoration_overwrites_previous_flags() {
    let tm = Tracemark::new();
    let first = tm
        .highlight_json(Some(&tagged(&[2])), &program())
        .expect("highlight should succeed");
    let second = tm
        .highlight_json(Some(&tagged(&[1, 9])), &first)
        .expect("highlight should succeed");

    assert_eq!(highlighted(&second), vec!["Nil", "Cons", "Lit"]);
}

#[test]
fn test_reserved_field_names_are_refused() {
    for field in ["tra", "$seq"] {
        let err = Tracemark::from_settings(&json!({ "field": field })).expect_err("must fail");
        assert!(matches!(err, Error::Config(_)));

        let config = HighlightConfig::new().with_field(field);
        let err = highlight_json(Some(&tagged(&[2])), &program(), &config).expect_err("must fail");
        assert!(matches!(err, Error::Config(_)));
    }
}
