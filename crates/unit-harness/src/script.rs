//! Bare-assertion scripts
//!
//! A [`Script`] is the framework-less way of testing: a list of checks run
//! top to bottom. The first failing check halts the script, so nothing
//! after it runs and nothing is reported beyond that one failure.

use thiserror::Error;

type Check<'a> = Box<dyn Fn() -> anyhow::Result<()> + 'a>;

/// A linear sequence of checks
#[derive(Default)]
pub struct Script<'a> {
    checks: Vec<(String, Check<'a>)>,
}

/// The script stopped at a failing check
#[derive(Debug, Error)]
#[error("check #{index} ({name}) failed: {message}")]
pub struct ScriptHalted {
    /// Zero-based position of the failing check
    pub index: usize,
    /// Name of the failing check
    pub name: String,
    /// Failure message
    pub message: String,
    /// Number of checks that passed before the failure
    pub passed: usize,
}

impl<'a> Script<'a> {
    /// Create an empty script
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Append a check
    #[must_use]
    pub fn check<F>(mut self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + 'a,
    {
        self.checks.push((name.into(), Box::new(check)));
        self
    }

    /// Number of checks in the script
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the script has no checks
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check in order, returning how many ran
    pub fn run(&self) -> Result<usize, ScriptHalted> {
        for (index, (name, check)) in self.checks.iter().enumerate() {
            log::debug!("script: running check #{index} ({name})");
            if let Err(err) = check() {
                return Err(ScriptHalted {
                    index,
                    name: name.clone(),
                    message: format!("{err:#}"),
                    passed: index,
                });
            }
        }
        Ok(self.checks.len())
    }
}
