//! Run results

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::assertions::AssertionFailed;
use crate::subtest::SubTestFailures;

/// Outcome of a test method or sub-test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum Outcome {
    /// Every assertion held
    Passed,
    /// An assertion failed
    Failed(String),
    /// Something other than an assertion went wrong
    Errored(String),
}

impl Outcome {
    /// Classify the error returned by a test body
    ///
    /// An [`AssertionFailed`] anywhere in the chain is a failure, any other
    /// error is an error.
    pub fn from_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<AssertionFailed>().is_some() {
            Self::Failed(format!("{err:#}"))
        } else {
            Self::Errored(format!("{err:#}"))
        }
    }

    /// Whether this is [`Outcome::Passed`]
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Whether this is [`Outcome::Failed`]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether this is [`Outcome::Errored`]
    pub fn is_errored(&self) -> bool {
        matches!(self, Self::Errored(_))
    }

    /// Short status label used in tables
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "ok",
            Self::Failed(_) => "FAIL",
            Self::Errored(_) => "ERROR",
        }
    }

    /// The failure or error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Passed => None,
            Self::Failed(message) | Self::Errored(message) => Some(message),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}: {}", self.label(), message),
            None => f.write_str(self.label()),
        }
    }
}

/// Outcome of one labelled row inside a test method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubTestRecord {
    /// Row label
    pub label: String,
    /// Row outcome
    pub outcome: Outcome,
}

/// Outcome of one test method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRecord {
    /// Name of the test class
    pub class: String,
    /// Name of the test method
    pub method: String,
    /// Outcome of the method body
    pub outcome: Outcome,
    /// Failing sub-tests, reported individually
    pub subtests: Vec<SubTestRecord>,
    /// Error raised by `tear_down` after the body ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tear_down_error: Option<String>,
}

impl TestRecord {
    /// Build a record from the value a test body returned
    pub fn from_result(class: &str, method: &str, result: anyhow::Result<()>) -> Self {
        let (outcome, subtests) = match result {
            Ok(()) => (Outcome::Passed, Vec::new()),
            Err(err) => match err.downcast::<SubTestFailures>() {
                Ok(failures) => {
                    let outcome = if failures.failures.iter().all(|s| s.outcome.is_errored()) {
                        Outcome::Errored(failures.to_string())
                    } else {
                        Outcome::Failed(failures.to_string())
                    };
                    (outcome, failures.failures)
                }
                Err(err) => (Outcome::from_error(&err), Vec::new()),
            },
        };

        Self {
            class: class.to_string(),
            method: method.to_string(),
            outcome,
            subtests,
            tear_down_error: None,
        }
    }

    /// Record for a method that never ran its body
    pub fn errored(class: &str, method: &str, message: impl Into<String>) -> Self {
        Self {
            class: class.to_string(),
            method: method.to_string(),
            outcome: Outcome::Errored(message.into()),
            subtests: Vec::new(),
            tear_down_error: None,
        }
    }

    /// Whether the body passed and `tear_down` succeeded
    pub fn is_clean(&self) -> bool {
        self.outcome.is_passed() && self.tear_down_error.is_none()
    }

    /// Number of failures this record contributes
    pub fn failure_count(&self) -> usize {
        if self.subtests.is_empty() {
            usize::from(self.outcome.is_failed())
        } else {
            self.subtests.iter().filter(|s| s.outcome.is_failed()).count()
        }
    }

    /// Number of errors this record contributes, a failed `tear_down`
    /// counting as one more
    pub fn error_count(&self) -> usize {
        let body = if self.subtests.is_empty() {
            usize::from(self.outcome.is_errored())
        } else {
            self.subtests.iter().filter(|s| s.outcome.is_errored()).count()
        };
        body + usize::from(self.tear_down_error.is_some())
    }
}

/// Error raised by a module or class hook rather than by a test method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeError {
    /// Hook and owner, e.g. `setUpClass (TestDirectory)`
    pub scope: String,
    /// Error message
    pub message: String,
}

/// A lifecycle hook or test body was entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// Module-level setup created the temporary directory
    SetUpModule {
        /// Module name
        module: String,
        /// The directory shared by every class of the module
        dir: PathBuf,
    },
    /// Class-level setup
    SetUpClass {
        /// Class name
        class: String,
    },
    /// Per-test setup
    SetUp {
        /// Class name
        class: String,
        /// Method name
        method: String,
    },
    /// Test body
    Test {
        /// Class name
        class: String,
        /// Method name
        method: String,
    },
    /// Per-test teardown
    TearDown {
        /// Class name
        class: String,
        /// Method name
        method: String,
    },
    /// Class-level teardown
    TearDownClass {
        /// Class name
        class: String,
    },
    /// Module-level teardown
    TearDownModule {
        /// Module name
        module: String,
    },
}

/// Everything that happened while running one module
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    module: String,
    records: Vec<TestRecord>,
    errors: Vec<ScopeError>,
    events: Vec<LifecycleEvent>,
}

impl Report {
    /// Empty report for `module`
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Self::default()
        }
    }

    /// Name of the module that ran
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Per-method records in execution order
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Errors raised by module and class hooks
    pub fn scope_errors(&self) -> &[ScopeError] {
        &self.errors
    }

    /// Lifecycle events in execution order
    pub fn events(&self) -> &[LifecycleEvent] {
        &self.events
    }

    /// Look up the record of `class::method`
    pub fn record(&self, class: &str, method: &str) -> Option<&TestRecord> {
        self.records
            .iter()
            .find(|r| r.class == class && r.method == method)
    }

    pub(crate) fn push_record(&mut self, record: TestRecord) {
        log::debug!(
            "{}.{}: {}",
            record.class,
            record.method,
            record.outcome.label()
        );
        self.records.push(record);
    }

    pub(crate) fn push_scope_error(&mut self, scope: String, err: &anyhow::Error) {
        log::warn!("{scope}: {err:#}");
        self.errors.push(ScopeError {
            scope,
            message: format!("{err:#}"),
        });
    }

    pub(crate) fn push_event(&mut self, event: LifecycleEvent) {
        log::trace!("{event:?}");
        self.events.push(event);
    }

    /// Number of test methods that ran
    pub fn tests_run(&self) -> usize {
        self.records.len()
    }

    /// Number of methods that passed
    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.is_clean()).count()
    }

    /// Number of failures, counting failing sub-tests individually
    pub fn failed(&self) -> usize {
        self.records.iter().map(TestRecord::failure_count).sum()
    }

    /// Number of errors, including errors raised by hooks
    pub fn errors(&self) -> usize {
        self.records.iter().map(TestRecord::error_count).sum::<usize>() + self.errors.len()
    }

    /// Whether nothing failed and nothing errored
    pub fn was_successful(&self) -> bool {
        self.failed() == 0 && self.errors() == 0
    }

    /// `unittest`-style summary, e.g. `Ran 5 tests: FAILED (failures=1)`
    pub fn summary(&self) -> String {
        let run = self.tests_run();
        let plural = if run == 1 { "" } else { "s" };
        if self.was_successful() {
            return format!("Ran {run} test{plural}: OK");
        }

        let mut counts = Vec::new();
        if self.failed() > 0 {
            counts.push(format!("failures={}", self.failed()));
        }
        if self.errors() > 0 {
            counts.push(format!("errors={}", self.errors()));
        }
        format!("Ran {run} test{plural}: FAILED ({})", counts.join(", "))
    }
}
