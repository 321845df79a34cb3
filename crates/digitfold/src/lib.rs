//! digitfold — command shell around the `digitfold-core` operations.
//!
//! The core functions are I/O-free; this crate holds everything the two
//! binaries share: selector dispatch, error wording, and the prompt/read
//! helper for interactive use.

use std::io::{self, Write};

use anyhow::{Context, Result};

pub use digitfold_core::{DigitError, DigitResult};
use digitfold_core::{alternating_square_sum, digital_root, to_binary_digits};

/// One of the three menu operations, identified by its numeric selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Selector 1 — binary digit encoding.
    BinaryDigits,
    /// Selector 2 — repeated digit-sum reduction.
    DigitalRoot,
    /// Selector 3 — alternating signed sum of squares.
    AlternatingSquareSum,
}

impl Selection {
    /// Map a menu selector to an operation. Anything outside {1, 2, 3}
    /// is `None` — the shell reports it and performs no computation.
    pub fn from_selector(selector: i32) -> Option<Self> {
        match selector {
            1 => Some(Self::BinaryDigits),
            2 => Some(Self::DigitalRoot),
            3 => Some(Self::AlternatingSquareSum),
            _ => None,
        }
    }

    /// Operation name used in error reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::BinaryDigits => "binary digits",
            Self::DigitalRoot => "digital root",
            Self::AlternatingSquareSum => "alternating square sum",
        }
    }

    /// Invoke the selected core function on `n`.
    pub fn evaluate(self, n: i32) -> DigitResult<i32> {
        match self {
            Self::BinaryDigits => to_binary_digits(n),
            Self::DigitalRoot => Ok(digital_root(n)),
            Self::AlternatingSquareSum => alternating_square_sum(n),
        }
    }
}

/// User-facing description of a core error.
pub fn describe(err: DigitError) -> &'static str {
    match err {
        DigitError::NegativeInput => "negative input is outside the domain of this operation",
        DigitError::Overflow => "result does not fit in a 32-bit integer",
        DigitError::NotBinary => "input has a decimal digit other than 0 or 1",
    }
}

/// Print `prompt` to stdout, flush, and parse one line of stdin as an `i32`.
pub fn prompt_i32(prompt: &str) -> Result<i32> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush prompt")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    let trimmed = line.trim();
    trimmed
        .parse()
        .with_context(|| format!("failed to parse {trimmed:?} as an integer"))
}
