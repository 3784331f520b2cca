//! Root CLI structure for unittest-rs

use clap::{Parser, Subcommand};

use crate::commands::divide::DivideArgs;
use crate::commands::run::RunArgs;

#[derive(Parser)]
#[command(name = "unittest-rs")]
#[command(about = "Runnable demonstrations of unit-testing techniques", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Divide two operands
    Divide(DivideArgs),

    /// Run the bare-assertion script (halts at the first failing check)
    Script,

    /// Run demonstration suites through the test harness
    ///
    /// Fixture setup and teardown are announced on stderr as they happen;
    /// pass -q to hide them.
    Run(RunArgs),

    /// List the demonstration suites
    List,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
