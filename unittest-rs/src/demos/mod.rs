//! Demonstration suites
//!
//! Each suite exercises `divider::divide` or a file fixture in a different
//! test organisation. Some of them fail on purpose: `basic` and
//! `data-driven` each carry one wrong expectation (4 / 2 == 1) so the
//! failure report can be seen.

pub mod bare;
pub mod basic;
pub mod data_driven;
pub mod fixtures;

use clap::ValueEnum;
use std::path::Path;

use divider::{Operand, Quotient};
use unit_harness::TestModule;

/// Divide two values convertible to operands
pub fn div(dividend: impl Into<Operand>, divisor: impl Into<Operand>) -> divider::Result<Quotient> {
    divider::divide(&dividend.into(), &divisor.into())
}

/// A suite runnable through the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Demo {
    /// Framework-style test methods, one failing on purpose
    Basic,
    /// Table-driven rows reported as sub-tests
    DataDriven,
    /// One method creating its own file
    Trivial,
    /// Four methods, each recreating the file
    MultipleCases,
    /// File created and removed around every method
    TestSetup,
    /// File created once per class
    ClassSetup,
    /// Temporary directory per module, file and subdirectory per class
    ModuleSetup,
}

impl Demo {
    /// Every suite, in presentation order
    pub const ALL: [Self; 7] = [
        Self::Basic,
        Self::DataDriven,
        Self::Trivial,
        Self::MultipleCases,
        Self::TestSetup,
        Self::ClassSetup,
        Self::ModuleSetup,
    ];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::DataDriven => "data-driven",
            Self::Trivial => "trivial",
            Self::MultipleCases => "multiple-cases",
            Self::TestSetup => "test-setup",
            Self::ClassSetup => "class-setup",
            Self::ModuleSetup => "module-setup",
        }
    }

    /// One-line description
    pub fn description(self) -> &'static str {
        match self {
            Self::Basic => "Test methods with assertions; test_failing fails on purpose",
            Self::DataDriven => "Rows of a table run as sub-tests; 'failing test' fails on purpose",
            Self::Trivial => "A single test creating file.txt (left behind)",
            Self::MultipleCases => "Four tests each creating file.txt (left behind)",
            Self::TestSetup => "setUp/tearDown create and delete file.txt around each test",
            Self::ClassSetup => "setUpClass/tearDownClass create and delete file.txt once",
            Self::ModuleSetup => "setUpModule temp dir shared by two classes",
        }
    }

    /// Build the suite's module with fixtures rooted at `workdir`
    pub fn module(self, workdir: impl AsRef<Path>) -> TestModule {
        let workdir = workdir.as_ref();
        match self {
            Self::Basic => TestModule::new("test_basic", workdir).class::<basic::BasicTest>(),
            Self::DataDriven => {
                TestModule::new("test_data_driven", workdir).class::<data_driven::DataDrivenTest>()
            }
            Self::Trivial => fixtures::trivial::module(workdir),
            Self::MultipleCases => fixtures::multiple_cases::module(workdir),
            Self::TestSetup => fixtures::test_setup::module(workdir),
            Self::ClassSetup => fixtures::class_setup::module(workdir),
            Self::ModuleSetup => fixtures::module_setup::module(workdir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_value_enum() {
        for demo in Demo::ALL {
            let parsed = Demo::from_str(demo.name(), false).unwrap();
            assert_eq!(parsed, demo);
        }
    }

    #[test]
    fn test_div_helper() {
        assert_eq!(div(4, 2).unwrap(), Quotient::Int(2));
        assert!(div(4, "zero").is_err());
    }
}
