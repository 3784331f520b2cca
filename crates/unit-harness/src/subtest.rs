//! Sub-tests: independently reported rows inside one test method

use thiserror::Error;

use crate::report::{Outcome, SubTestRecord};

/// Collects the outcome of each labelled row
///
/// A failing row does not stop the rows after it. Call [`SubTests::finish`]
/// at the end of the method and return its error with `?`.
#[derive(Debug, Default)]
pub struct SubTests {
    total: usize,
    failures: Vec<SubTestRecord>,
}

impl SubTests {
    /// Start collecting
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one row under `label`
    pub fn run<F>(&mut self, label: impl Into<String>, check: F)
    where
        F: FnOnce() -> anyhow::Result<()>,
    {
        let label = label.into();
        self.total += 1;
        match check() {
            Ok(()) => log::debug!("subtest [{label}]: ok"),
            Err(err) => {
                let outcome = Outcome::from_error(&err);
                log::debug!("subtest [{label}]: {outcome}");
                self.failures.push(SubTestRecord { label, outcome });
            }
        }
    }

    /// Number of rows run so far
    pub fn total(&self) -> usize {
        self.total
    }

    /// Finish, failing if any row failed or errored
    pub fn finish(self) -> Result<(), SubTestFailures> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(SubTestFailures {
                total: self.total,
                failures: self.failures,
            })
        }
    }
}

/// One or more rows of a [`SubTests`] did not pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{} of {} sub-tests did not pass: {}",
    .failures.len(),
    .total,
    join_labels(.failures)
)]
pub struct SubTestFailures {
    /// Number of rows that ran
    pub total: usize,
    /// The rows that failed or errored, in order
    pub failures: Vec<SubTestRecord>,
}

fn join_labels(rows: &[SubTestRecord]) -> String {
    rows.iter()
        .map(|row| row.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::assert_equal;

    #[test]
    fn test_every_row_runs() {
        let mut subtests = SubTests::new();
        subtests.run("first", || Ok(assert_equal(1, 1)?));
        subtests.run("second", || Ok(assert_equal(2, 1)?));
        subtests.run("third", || anyhow::bail!("no such file"));
        subtests.run("fourth", || Ok(()));
        assert_eq!(subtests.total(), 4);

        let failures = subtests.finish().unwrap_err();
        assert_eq!(failures.total, 4);
        assert_eq!(
            failures.failures,
            vec![
                SubTestRecord {
                    label: "second".into(),
                    outcome: Outcome::Failed("2 != 1".into()),
                },
                SubTestRecord {
                    label: "third".into(),
                    outcome: Outcome::Errored("no such file".into()),
                },
            ]
        );
        assert_eq!(
            failures.to_string(),
            "2 of 4 sub-tests did not pass: second, third"
        );
    }

    #[test]
    fn test_all_rows_pass() {
        let mut subtests = SubTests::new();
        subtests.run("only", || Ok(()));
        assert!(subtests.finish().is_ok());
    }
}
