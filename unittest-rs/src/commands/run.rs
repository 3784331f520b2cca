//! Run command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use unit_harness::{Report, Runner};

use crate::demos::Demo;
use crate::utils::print_report;

/// How to print run results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One table per suite
    Table,
    /// Every report as a JSON array
    Json,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Suites to run (all when omitted)
    #[arg(value_enum)]
    pub suites: Vec<Demo>,

    /// Directory where working-directory fixtures are created
    #[arg(long, env = "UNITTEST_RS_WORKDIR", default_value = ".")]
    pub workdir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Stop each suite at its first failure or error
    #[arg(long)]
    pub fail_fast: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let reports = run_suites(&args)?;

    match args.format {
        OutputFormat::Table => {
            for report in &reports {
                print_report(report);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    let unsuccessful = reports.iter().filter(|r| !r.was_successful()).count();
    if unsuccessful > 0 {
        anyhow::bail!("{} of {} suites failed", unsuccessful, reports.len());
    }

    Ok(())
}

/// Run the selected suites in order and collect their reports
pub fn run_suites(args: &RunArgs) -> Result<Vec<Report>> {
    anyhow::ensure!(
        args.workdir.is_dir(),
        "Working directory does not exist: {}",
        args.workdir.display()
    );
    let workdir = args
        .workdir
        .canonicalize()
        .with_context(|| format!("Failed to resolve working directory: {}", args.workdir.display()))?;

    let suites: Vec<Demo> = if args.suites.is_empty() {
        Demo::ALL.to_vec()
    } else {
        args.suites.clone()
    };

    let runner = Runner::new().fail_fast(args.fail_fast);
    let reports = suites
        .iter()
        .map(|demo| {
            log::debug!("running suite {}", demo.name());
            runner.run(&demo.module(&workdir))
        })
        .collect();

    Ok(reports)
}
