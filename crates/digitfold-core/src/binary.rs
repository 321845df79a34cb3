//! Binary-as-decimal digit encoding.
//!
//! [`to_binary_digits`] returns the binary representation of a non-negative
//! integer packed into a base-10 integer: the decimal digits of the result
//! spell the binary digits of the input (`5 → 101`, `10 → 1010`). The
//! recursion bottoms out at the most significant bit and appends one bit per
//! level on the way back up, so the encoding is most-significant-first by
//! construction.
//!
//! An `i32` holds at most ten decimal digits, so only inputs below 1024
//! (ten binary digits) are encodable; anything wider is an
//! [`Overflow`](DigitError::Overflow). Negative input has no binary-digit
//! reading here and is rejected.

use crate::{DigitError, DigitResult};

/// Encode the binary digits of `n` as a decimal integer.
///
/// # Errors
/// `NegativeInput` for `n < 0`; `Overflow` when the encoding needs more than
/// ten digits (first at `n == 1024`).
pub fn to_binary_digits(n: i32) -> DigitResult<i32> {
    if n < 0 {
        return Err(DigitError::NegativeInput);
    }
    if n == 0 {
        return Ok(0);
    }
    // Encode the high bits first, then append the current bit as a new
    // least-significant decimal digit.
    let prefix = to_binary_digits(n / 2)?;
    prefix
        .checked_mul(10)
        .and_then(|p| p.checked_add(n % 2))
        .ok_or(DigitError::Overflow)
}

/// Decode a decimal integer whose digits are all 0 or 1 back to the value
/// of that bit string — the inverse of [`to_binary_digits`].
///
/// # Errors
/// `NegativeInput` for `encoded < 0`; `NotBinary` if any decimal digit of
/// `encoded` is greater than 1.
pub fn from_binary_digits(encoded: i32) -> DigitResult<i32> {
    if encoded < 0 {
        return Err(DigitError::NegativeInput);
    }
    // An i32 encoding has at most ten digits, so the bit weight tops out at
    // 2^9 and neither it nor the value can overflow.
    let mut rest = encoded;
    let mut value = 0;
    let mut weight = 1;
    while rest != 0 {
        match rest % 10 {
            0 => {}
            1 => value += weight,
            _ => return Err(DigitError::NotBinary),
        }
        weight *= 2;
        rest /= 10;
    }
    Ok(value)
}

// ── Tests ─────────────────────────────────────────────────────────────────────


// ── Kani Formal Verification Proofs ──────────────────────────────────────
//
// Run with: cargo kani -p digitfold-core

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: to_binary_digits never panics — every i32 yields Ok or Err.
    #[kani::proof]
    #[kani::unwind(34)]
    fn to_binary_digits_never_panics() {
        let n: i32 = kani::any();
        let result = to_binary_digits(n);
        if n < 0 {
            kani::assert(
                result == Err(DigitError::NegativeInput),
                "negative input must be rejected",
            );
        }
    }

    /// Proof: decode inverts encode over the whole encodable domain.
    #[kani::proof]
    #[kani::unwind(34)]
    fn decode_inverts_encode() {
        let n: i32 = kani::any();
        kani::assume((0..1024).contains(&n));
        let encoded = to_binary_digits(n).unwrap();
        kani::assert(
            from_binary_digits(encoded) == Ok(n),
            "decode must invert encode",
        );
    }

    /// Proof: from_binary_digits never panics for any i32.
    #[kani::proof]
    #[kani::unwind(12)]
    fn from_binary_digits_never_panics() {
        let encoded: i32 = kani::any();
        let _ = from_binary_digits(encoded);
    }
}
