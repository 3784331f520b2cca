//! Divide command implementation

use anyhow::Result;
use clap::Args;
use console::style;

use divider::{Operand, divide};

#[derive(Args, Debug)]
pub struct DivideArgs {
    /// Dividend: an integer, a float, or any other text
    #[arg(allow_negative_numbers = true)]
    pub dividend: Operand,

    /// Divisor: an integer, a float, or any other text
    #[arg(allow_negative_numbers = true)]
    pub divisor: Operand,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: DivideArgs) -> Result<()> {
    let quotient = match divide(&args.dividend, &args.divisor) {
        Ok(quotient) => quotient,
        Err(err) => anyhow::bail!("{}: {}", err.kind(), err),
    };

    if args.json {
        let output = serde_json::json!({
            "dividend": args.dividend,
            "divisor": args.divisor,
            "quotient": quotient,
            "type": if quotient.is_int() { "int" } else { "float" },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} / {} = {}",
            args.dividend,
            args.divisor,
            style(quotient).green()
        );
    }

    Ok(())
}
