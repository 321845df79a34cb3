//! End-to-end tests for the binary digit encoding.

use digitfold_core::{from_binary_digits, to_binary_digits, DigitError};
use digitfold_tests::binary_digits_oracle;

#[test]
fn test_known_encodings() {
    let cases: &[(i32, i32)] = &[
        (0, 0),
        (1, 1),
        (2, 10),
        (3, 11),
        (5, 101),
        (8, 1000),
        (10, 1010),
        (100, 1100100),
        (255, 11111111),
        (1023, 1_111_111_111),
    ];

    for &(n, expected) in cases {
        assert_eq!(
            to_binary_digits(n).unwrap(),
            expected,
            "binary digits of {} should read {}",
            n,
            expected
        );
    }
}

#[test]
fn test_encoding_matches_formatter_oracle() {
    for n in 0..1024 {
        assert_eq!(
            to_binary_digits(n).unwrap(),
            binary_digits_oracle(n).expect("oracle in range"),
            "encoding of {} should match {{:b}}",
            n
        );
    }
}

#[test]
fn test_digits_read_back_as_base_two() {
    // Interpreting the decimal digits of the result as a base-2 numeral
    // recovers the input.
    for n in 0..1024 {
        let digits = to_binary_digits(n).unwrap().to_string();
        let read_back = i32::from_str_radix(&digits, 2).unwrap();
        assert_eq!(read_back, n, "digits of encode({}) as base 2", n);
    }
}

#[test]
fn test_decoder_inverts_encoder() {
    for n in 0..1024 {
        let encoded = to_binary_digits(n).unwrap();
        assert_eq!(from_binary_digits(encoded), Ok(n));
    }
}

#[test]
fn test_domain_edges() {
    assert_eq!(to_binary_digits(-1), Err(DigitError::NegativeInput));
    assert_eq!(to_binary_digits(1023).unwrap(), 1_111_111_111);
    assert_eq!(to_binary_digits(1024), Err(DigitError::Overflow));
}
