//! Report rendering

use console::style;
use unit_harness::{Outcome, Report};

use crate::utils::{add_outcome_row, create_table};

/// Print one suite: a row per test, an indented row per failing sub-test
/// or failed `tear_down`, then hook errors and the summary line
pub fn print_report(report: &Report) {
    println!("{}", style(report.module()).bold().cyan());

    let mut table = create_table(vec!["Class", "Test", "Status", "Message"]);
    for record in report.records() {
        add_outcome_row(
            &mut table,
            vec![record.class.clone(), record.method.clone()],
            &record.outcome,
        );
        for subtest in &record.subtests {
            add_outcome_row(
                &mut table,
                vec![String::new(), format!("  [{}]", subtest.label)],
                &subtest.outcome,
            );
        }
        if let Some(error) = &record.tear_down_error {
            add_outcome_row(
                &mut table,
                vec![String::new(), "  [tearDown]".to_string()],
                &Outcome::Errored(error.clone()),
            );
        }
    }
    table.printstd();

    for error in report.scope_errors() {
        println!(
            "{} {}: {}",
            style("ERROR").magenta(),
            error.scope,
            error.message
        );
    }

    let summary = report.summary();
    if report.was_successful() {
        println!("✓ {}\n", style(summary).green());
    } else {
        println!("✗ {}\n", style(summary).red());
    }
}
