//! Tests for legend token parsing.

use proptest::prelude::*;
use xtract_core::parse_token;
use xtract_model::LegendError;

#[test]
fn parses_namespace_and_index() {
    let segment = parse_token(":Foo<3>").expect("valid token");
    assert_eq!(segment.name, "Foo");
    assert!(segment.has_namespace);
    assert_eq!(segment.occurrence_index, 2);
    assert_eq!(segment.raw_token, ":Foo<3>");
}

#[test]
fn parses_index_without_namespace() {
    let segment = parse_token("Birth<2>").expect("valid token");
    assert_eq!(segment.name, "Birth");
    assert!(!segment.has_namespace);
    assert_eq!(segment.occurrence_index, 1);
}

#[test]
fn parses_namespace_without_index() {
    let segment = parse_token(":Person").expect("valid token");
    assert_eq!(segment.name, "Person");
    assert!(segment.has_namespace);
    assert_eq!(segment.occurrence_index, 0);
}

#[test]
fn first_occurrence_maps_to_zero() {
    let segment = parse_token("Item<1>").expect("valid token");
    assert_eq!(segment.occurrence_index, 0);
}

#[test]
fn zero_index_is_rejected() {
    let error = parse_token(":Foo<0>").expect_err("index 0 is invalid");
    assert!(matches!(error, LegendError::ZeroIndex { ref token } if token == ":Foo<0>"));
}

#[test]
fn non_numeric_index_is_rejected() {
    let error = parse_token("Foo<x>").expect_err("non-numeric index");
    assert!(matches!(
        error,
        LegendError::InvalidIndex { ref literal, .. } if literal == "x"
    ));
    assert!(matches!(
        parse_token("Foo<>"),
        Err(LegendError::InvalidIndex { .. })
    ));
    assert!(matches!(
        parse_token("Foo<-1>"),
        Err(LegendError::InvalidIndex { .. })
    ));
}

#[test]
fn index_literal_must_be_plain_digits() {
    for token in ["Foo<+3>", "Foo< 3>", "Foo<3 >", "Foo<0x3>"] {
        assert!(
            matches!(parse_token(token), Err(LegendError::InvalidIndex { .. })),
            "{token} should be rejected"
        );
    }
}

#[test]
fn closing_bracket_without_opening_is_rejected() {
    assert!(matches!(
        parse_token("Foo>"),
        Err(LegendError::MissingIndexOpen { .. })
    ));
}

#[test]
fn unterminated_index_is_part_of_the_name() {
    let segment = parse_token("Foo<2").expect("no index decoration");
    assert_eq!(segment.name, "Foo<2");
    assert_eq!(segment.occurrence_index, 0);
}

proptest! {
    #[test]
    fn undecorated_tokens_are_plain_names(token in "[A-Za-z_][A-Za-z0-9_.-]{0,24}") {
        let segment = parse_token(&token).expect("plain token");
        prop_assert_eq!(&segment.name, &token);
        prop_assert!(!segment.has_namespace);
        prop_assert_eq!(segment.occurrence_index, 0);
        prop_assert_eq!(&segment.raw_token, &token);
    }

    #[test]
    fn index_literal_is_stored_zero_based(ordinal in 1usize..10_000) {
        let token = format!(":Node<{ordinal}>");
        let segment = parse_token(&token).expect("decorated token");
        prop_assert_eq!(segment.occurrence_index, ordinal - 1);
        prop_assert_eq!(segment.name.as_str(), "Node");
    }
}
