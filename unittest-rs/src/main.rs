//! Main entry point for the unittest-rs CLI

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::{Generator, generate};
use std::io;

use unittest_rs::cli::{Cli, Commands};
use unittest_rs::commands;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG still overrides the verbosity flags
    let env = env_logger::Env::default().default_filter_or(default_filter(&cli));
    env_logger::Builder::from_env(env).init();

    // Execute command
    match cli.command {
        Commands::Divide(args) => commands::divide::execute(args),
        Commands::Script => commands::script::execute(),
        Commands::Run(args) => commands::run::execute(args),
        Commands::List => commands::list::execute(),
        Commands::Completions { shell } => {
            print_completions(shell, &mut Cli::command());
            Ok(())
        }
    }
}

/// Log level used when RUST_LOG is unset. `run` shows the fixture
/// announcements of the lifecycle hooks unless `-q` is given.
fn default_filter(cli: &Cli) -> &'static str {
    match (cli.verbose, cli.quiet) {
        (0, true) => "error",
        (0, false) if matches!(cli.command, Commands::Run(_)) => "info",
        (0, false) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}
