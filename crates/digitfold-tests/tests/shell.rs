//! Tests for the shell crate's selector dispatch contract.

use digitfold::{describe, DigitError, Selection};

#[test]
fn test_selector_round_trip() {
    let table: &[(i32, Selection)] = &[
        (1, Selection::BinaryDigits),
        (2, Selection::DigitalRoot),
        (3, Selection::AlternatingSquareSum),
    ];

    for &(selector, expected) in table {
        assert_eq!(
            Selection::from_selector(selector),
            Some(expected),
            "selector {} should map to {:?}",
            selector,
            expected
        );
    }
}

#[test]
fn test_invalid_selectors_select_nothing() {
    for selector in [i32::MIN, -1, 0, 4, 5, 99, i32::MAX] {
        assert_eq!(
            Selection::from_selector(selector),
            None,
            "selector {} is outside the menu",
            selector
        );
    }
}

#[test]
fn test_dispatch_matches_core_results() {
    // The menu's documented examples, one per operation
    assert_eq!(Selection::BinaryDigits.evaluate(10), Ok(1010));
    assert_eq!(Selection::DigitalRoot.evaluate(-38), Ok(2));
    assert_eq!(Selection::AlternatingSquareSum.evaluate(3), Ok(6));
}

#[test]
fn test_labels_are_distinct() {
    let labels = [
        Selection::BinaryDigits.label(),
        Selection::DigitalRoot.label(),
        Selection::AlternatingSquareSum.label(),
    ];
    for (i, a) in labels.iter().enumerate() {
        for (j, b) in labels.iter().enumerate() {
            assert_eq!(i == j, a == b, "labels must distinguish operations");
        }
    }
}

#[test]
fn test_describe_covers_every_error() {
    for err in [
        DigitError::NegativeInput,
        DigitError::Overflow,
        DigitError::NotBinary,
    ] {
        assert!(!describe(err).is_empty());
    }
}
