//! A small xUnit-style test harness.
//!
//! The harness exists to make test *organisation* visible: where a
//! fixture is created, when it is destroyed, and how a failure is reported
//! depending on whether checks run as a bare [`Script`], as methods of a
//! [`TestClass`], or as [`SubTests`] rows inside one method.
//!
//! # Examples
//!
//! ```
//! use unit_harness::{
//!     ModuleScope, Runner, TestClass, TestMethod, TestModule, assert_equal, test_methods,
//! };
//!
//! struct Arithmetic;
//!
//! impl Arithmetic {
//!     fn test_addition(&mut self) -> anyhow::Result<()> {
//!         assert_equal(2 + 2, 4)?;
//!         Ok(())
//!     }
//! }
//!
//! impl TestClass for Arithmetic {
//!     const NAME: &'static str = "Arithmetic";
//!
//!     fn set_up_class(_scope: &ModuleScope) -> anyhow::Result<Self> {
//!         Ok(Self)
//!     }
//!
//!     fn methods() -> Vec<TestMethod<Self>> {
//!         test_methods![Self => test_addition]
//!     }
//! }
//!
//! let module = TestModule::new("arithmetic", std::env::temp_dir()).class::<Arithmetic>();
//! let report = Runner::new().run(&module);
//! assert_eq!(report.summary(), "Ran 1 test: OK");
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod assertions;
pub mod class;
pub mod error;
pub mod fixtures;
pub mod module;
pub mod probe;
pub mod report;
pub mod runner;
pub mod script;
pub mod subtest;

pub use assertions::{
    AssertionExt, AssertionFailed, CheckResult, assert_equal, assert_false, assert_not_equal,
    assert_raises, assert_true,
};
pub use class::{TestBody, TestClass, TestMethod};
pub use error::{HarnessError, Result};
pub use fixtures::{DIR_NAME, DirFixture, FILE_CONTENT, FILE_NAME, FileFixture, TempDirFixture};
pub use module::{ModuleScope, TestModule};
pub use report::{LifecycleEvent, Outcome, Report, ScopeError, SubTestRecord, TestRecord};
pub use runner::Runner;
pub use script::{Script, ScriptHalted};
pub use subtest::{SubTestFailures, SubTests};
