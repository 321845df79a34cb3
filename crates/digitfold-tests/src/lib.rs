//! Straight-line reference implementations used as oracles by the
//! integration tests and benchmarks. Each one computes the same value as
//! its recursive counterpart in `digitfold-core` by a different route.

/// Binary digit encoding via the formatter: `{:b}` spells the binary
/// digits, re-read as a decimal integer. `None` when the decimal reading
/// does not fit in an `i32`.
pub fn binary_digits_oracle(n: i32) -> Option<i32> {
    assert!(n >= 0);
    format!("{n:b}").parse().ok()
}

/// Digital root via the nine-congruence closed form.
pub fn digital_root_oracle(n: i32) -> i32 {
    let magnitude = n.unsigned_abs();
    if magnitude == 0 {
        0
    } else {
        (1 + (magnitude - 1) % 9) as i32
    }
}

/// One-pass digit sum, iterative.
pub fn digit_sum_oracle(n: i32) -> i32 {
    let mut rest = n.unsigned_abs();
    let mut sum = 0;
    while rest > 0 {
        sum += rest % 10;
        rest /= 10;
    }
    sum as i32
}

/// The alternating square series telescopes to the triangular numbers.
pub fn triangular(n: i32) -> i32 {
    n * (n + 1) / 2
}

/// Digit reversal on u32, no overflow concerns for in-range results.
pub fn reverse_oracle(mut n: u32) -> u32 {
    let mut reversed = 0;
    while n > 0 {
        reversed = reversed * 10 + n % 10;
        n /= 10;
    }
    reversed
}
