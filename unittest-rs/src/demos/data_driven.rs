//! Data-driven tests
//!
//! Two tables drive the assertions. Every row runs as its own sub-test,
//! so the deliberately wrong "failing test" row is reported without
//! hiding the rows after it.

use divider::{DivideError, ErrorKind, Operand, Quotient, divide};
use unit_harness::{
    ModuleScope, SubTests, TestClass, TestMethod, assert_equal, assert_raises, test_methods,
};

/// A row expecting a quotient
#[derive(Debug, Clone, PartialEq)]
pub struct DataCase {
    /// Sub-test label
    pub label: &'static str,
    /// Dividend
    pub dividend: Operand,
    /// Divisor
    pub divisor: Operand,
    /// Expected quotient
    pub expected: Quotient,
}

/// A row expecting an error
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCase {
    /// Sub-test label
    pub label: &'static str,
    /// Dividend
    pub dividend: Operand,
    /// Divisor
    pub divisor: Operand,
    /// Expected error kind
    pub expected: ErrorKind,
}

/// Rows checked by `test_with_data`; "failing test" is wrong on purpose
pub fn data_cases() -> Vec<DataCase> {
    vec![
        DataCase {
            label: "divide integers",
            dividend: Operand::Int(4),
            divisor: Operand::Int(2),
            expected: Quotient::Int(2),
        },
        DataCase {
            label: "failing test",
            dividend: Operand::Int(4),
            divisor: Operand::Int(2),
            expected: Quotient::Int(1),
        },
        DataCase {
            label: "divide floats",
            dividend: Operand::Float(4.0),
            divisor: Operand::Float(2.0),
            expected: Quotient::Float(2.0),
        },
    ]
}

/// Rows checked by `test_errors`
pub fn error_cases() -> Vec<ErrorCase> {
    vec![
        ErrorCase {
            label: "divide by zero",
            dividend: Operand::Int(4),
            divisor: Operand::Int(0),
            expected: ErrorKind::DivisionByZero,
        },
        ErrorCase {
            label: "divide by string",
            dividend: Operand::Int(4),
            divisor: Operand::from("zero"),
            expected: ErrorKind::TypeMismatch,
        },
    ]
}

/// Table-driven divide tests
pub struct DataDrivenTest {
    data_cases: Vec<DataCase>,
    error_cases: Vec<ErrorCase>,
}

impl DataDrivenTest {
    fn test_with_data(&mut self) -> anyhow::Result<()> {
        let mut subtests = SubTests::new();
        for case in &self.data_cases {
            subtests.run(case.label, || {
                assert_equal(divide(&case.dividend, &case.divisor)?, case.expected)?;
                Ok(())
            });
        }
        subtests.finish()?;
        Ok(())
    }

    fn test_errors(&mut self) -> anyhow::Result<()> {
        let mut subtests = SubTests::new();
        for case in &self.error_cases {
            subtests.run(case.label, || {
                assert_raises(
                    divide(&case.dividend, &case.divisor),
                    DivideError::kind,
                    case.expected,
                )?;
                Ok(())
            });
        }
        subtests.finish()?;
        Ok(())
    }
}

impl TestClass for DataDrivenTest {
    const NAME: &'static str = "DataDrivenTest";

    fn set_up_class(_scope: &ModuleScope) -> anyhow::Result<Self> {
        Ok(Self {
            data_cases: data_cases(),
            error_cases: error_cases(),
        })
    }

    fn methods() -> Vec<TestMethod<Self>> {
        test_methods![Self => test_with_data, test_errors]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        let labels: Vec<&str> = data_cases().iter().map(|c| c.label).collect();
        assert_eq!(labels, ["divide integers", "failing test", "divide floats"]);

        let labels: Vec<&str> = error_cases().iter().map(|c| c.label).collect();
        assert_eq!(labels, ["divide by zero", "divide by string"]);
    }

    #[test]
    fn test_only_the_failing_row_is_wrong() {
        for case in data_cases() {
            let quotient = divide(&case.dividend, &case.divisor).unwrap();
            assert_eq!(quotient == case.expected, case.label != "failing test");
        }
    }
}
