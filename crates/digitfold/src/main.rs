use anyhow::{bail, Result};
use clap::Parser;
use digitfold::{describe, prompt_i32, Selection};

/// digitfold — recursive digit arithmetic from the command line.
///
/// Picks one of three operations by numeric selector and applies it to one
/// integer. Both values can be passed as arguments or entered at a prompt.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Operation selector: 1 = binary digits, 2 = digital root,
    /// 3 = alternating square sum
    #[arg(allow_negative_numbers = true)]
    selector: Option<i32>,

    /// Integer argument for the selected operation
    #[arg(allow_negative_numbers = true)]
    number: Option<i32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let selector = match cli.selector {
        Some(selector) => selector,
        None => prompt_i32("Which operation would you like to run? (1-3): ")?,
    };

    // An unknown selector is reported, not fatal: the shell still exits 0.
    let Some(selection) = Selection::from_selector(selector) else {
        println!("{selector} is an invalid input");
        return Ok(());
    };

    let n = match cli.number {
        Some(n) => n,
        None => prompt_i32("Please enter a number: ")?,
    };

    match selection.evaluate(n) {
        Ok(value) => println!("Result = {value}"),
        Err(err) => bail!("cannot compute {} of {n}: {}", selection.label(), describe(err)),
    }

    Ok(())
}
