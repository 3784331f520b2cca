//! Bare-assertion script command

use anyhow::Result;
use console::style;

use crate::demos::bare;

pub fn execute() -> Result<()> {
    let script = bare::script();

    match script.run() {
        Ok(count) => {
            println!("✓ All {} checks passed", style(count).green());
            Ok(())
        }
        Err(halted) => {
            // No per-check report: everything after the failure is simply not run
            println!(
                "{} check(s) passed before the script stopped",
                style(halted.passed).yellow()
            );
            anyhow::bail!("AssertionError: {}", halted.message)
        }
    }
}
