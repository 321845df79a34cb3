//! Alternating signed sum of squares.
//!
//! [`alternating_square_sum`] computes `n² - (n-1)² + (n-2)² - … ± 1²`: the
//! topmost term always carries `+1`, and the sign alternates on the way
//! down. The sign is threaded through the recursion as an explicit `±1`
//! accumulator parameter, flipped at each level.
//!
//! Decrementing toward the `num == 0` base case never terminates from a
//! negative start, so negative input is rejected up front. The square is
//! computed with `checked_mul`, which also bounds the recursion depth: the
//! top-level square overflows first, at `n == 46341`.

use crate::{DigitError, DigitResult};

/// Alternating sum of squares from `n` down to 1, topmost sign positive.
///
/// # Errors
/// `NegativeInput` for `n < 0`; `Overflow` when `n²` exceeds `i32`
/// (first at `n == 46341`).
pub fn alternating_square_sum(n: i32) -> DigitResult<i32> {
    if n < 0 {
        return Err(DigitError::NegativeInput);
    }
    signed_square_sum(n, 1)
}

fn signed_square_sum(num: i32, sign: i32) -> DigitResult<i32> {
    if num == 0 {
        return Ok(0);
    }
    let square = num.checked_mul(num).ok_or(DigitError::Overflow)?;
    let rest = signed_square_sum(num - 1, -sign)?;
    // sign is ±1 and square is non-negative, so the product cannot overflow.
    (sign * square).checked_add(rest).ok_or(DigitError::Overflow)
}

// ── Tests ─────────────────────────────────────────────────────────────────────


// ── Kani Formal Verification Proofs ──────────────────────────────────────
//
// Run with: cargo kani -p digitfold-core

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: the recursion matches the triangular closed form for small n.
    #[kani::proof]
    #[kani::unwind(10)]
    fn small_sums_are_triangular() {
        let n: i32 = kani::any();
        kani::assume((0..=8).contains(&n));
        kani::assert(
            alternating_square_sum(n) == Ok(n * (n + 1) / 2),
            "alternating square sum must collapse to n(n+1)/2",
        );
    }

    /// Proof: negative input is rejected before any recursion runs.
    #[kani::proof]
    #[kani::unwind(2)]
    fn negative_input_is_rejected() {
        let n: i32 = kani::any();
        kani::assume(n < 0);
        kani::assert(
            alternating_square_sum(n) == Err(DigitError::NegativeInput),
            "negative input must be rejected",
        );
    }
}
