//! `digitfold-core` — Recursive digit arithmetic over native integers.
//!
//! This crate is `#![no_std]`. It provides four independent pure functions
//! over `i32` plus small companions:
//! - [`to_binary_digits`] / [`from_binary_digits`] for binary-as-decimal
//!   digit encoding
//! - [`digital_root`] / [`digit_sum`] for digit-sum reduction
//! - [`alternating_square_sum`] for the signed square series
//! - [`reverse_digits`] / [`is_palindrome`] for decimal digit reversal
//!
//! None of the functions perform I/O, allocate, or panic: out-of-domain
//! input and results that do not fit in an `i32` are reported through
//! [`DigitError`].

#![no_std]

mod binary;
pub use binary::{from_binary_digits, to_binary_digits};

mod root;
pub use root::{digit_sum, digital_root};

mod series;
pub use series::alternating_square_sum;

mod reverse;
pub use reverse::{is_palindrome, reverse_digits};

/// Domain and range errors — no panics, no unwinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitError {
    /// Argument outside the non-negative domain of the operation.
    NegativeInput,
    /// Result does not fit in the `i32` the operation computes in.
    Overflow,
    /// A decimal digit other than 0 or 1 where a binary encoding is expected.
    NotBinary,
}

/// Result type for digit operations — `Result<T, DigitError>`.
pub type DigitResult<T> = Result<T, DigitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_error_is_copy() {
        let err = DigitError::NegativeInput;
        let err2 = err; // Copy
        assert_eq!(err, err2);
    }

    #[test]
    fn digit_result_ok() {
        let result: DigitResult<i32> = Ok(42);
        assert!(result.is_ok());
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn digit_result_err() {
        let result: DigitResult<i32> = Err(DigitError::Overflow);
        assert!(result.is_err());
        assert_eq!(result, Err(DigitError::Overflow));
    }
}
