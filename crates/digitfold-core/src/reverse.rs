//! Decimal digit reversal.
//!
//! [`reverse_digits`] peels the least significant digit off the input and
//! appends it to the result until the input is exhausted. Trailing zeros of
//! the input become leading zeros of the output and are dropped
//! (`120 → 21`), so reversal is not an involution:
//! `reverse(reverse(120)) == 12`.
//!
//! Negative input is rejected rather than reversed; how that case is
//! presented (the `revdigits` shell prints a fixed sentinel line) belongs
//! to the caller.

use crate::{DigitError, DigitResult};

/// Reverse the decimal digits of a non-negative integer.
///
/// # Errors
/// `NegativeInput` for `n < 0`; `Overflow` when the reversal does not fit
/// in an `i32` (e.g. `reverse_digits(1_000_000_003)`).
pub fn reverse_digits(n: i32) -> DigitResult<i32> {
    if n < 0 {
        return Err(DigitError::NegativeInput);
    }
    let mut rest = n;
    let mut reversed: i32 = 0;
    while rest != 0 {
        reversed = reversed
            .checked_mul(10)
            .and_then(|r| r.checked_add(rest % 10))
            .ok_or(DigitError::Overflow)?;
        rest /= 10;
    }
    Ok(reversed)
}

/// Whether the decimal digits of `n` read the same in both directions.
///
/// A reversal too wide for `i32` cannot equal its input, so that case is
/// `Ok(false)` rather than an error.
///
/// # Errors
/// `NegativeInput` for `n < 0`.
pub fn is_palindrome(n: i32) -> DigitResult<bool> {
    match reverse_digits(n) {
        Ok(reversed) => Ok(reversed == n),
        Err(DigitError::Overflow) => Ok(false),
        Err(err) => Err(err),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


// ── Kani Formal Verification Proofs ──────────────────────────────────────
//
// Run with: cargo kani -p digitfold-core

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: reverse_digits never panics — every i32 yields Ok or Err.
    #[kani::proof]
    #[kani::unwind(12)]
    fn reverse_digits_never_panics() {
        let n: i32 = kani::any();
        let result = reverse_digits(n);
        if (0..10).contains(&n) {
            kani::assert(result == Ok(n), "single digits reverse to themselves");
        }
    }

    /// Proof: is_palindrome never panics and errors only on negative input.
    #[kani::proof]
    #[kani::unwind(12)]
    fn is_palindrome_never_panics() {
        let n: i32 = kani::any();
        let result = is_palindrome(n);
        kani::assert(
            result.is_err() == (n < 0),
            "palindrome check fails only for negative input",
        );
    }
}
