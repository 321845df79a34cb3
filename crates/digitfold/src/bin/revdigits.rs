use anyhow::{bail, Result};
use clap::Parser;
use digitfold::{describe, prompt_i32, DigitError};
use digitfold_core::reverse_digits;

/// revdigits — reverse the decimal digits of a non-negative integer.
///
/// Negative input is not reversed: the program prints a fixed sentinel
/// line and exits successfully without computing anything.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Integer to reverse; prompted for when omitted
    #[arg(allow_negative_numbers = true)]
    number: Option<i32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let n = match cli.number {
        Some(n) => n,
        None => prompt_i32("Enter a number to reverse: ")?,
    };

    match reverse_digits(n) {
        Ok(reversed) => println!("Reverse of number is: {reversed}"),
        // Negative input short-circuits to the sentinel line.
        Err(DigitError::NegativeInput) => println!("1"),
        Err(err) => bail!("cannot reverse {n}: {}", describe(err)),
    }

    Ok(())
}
