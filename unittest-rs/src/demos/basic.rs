//! Framework-style test methods
//!
//! Every method runs and reports on its own, so `test_failing` failing
//! does not hide the results of the others.

use divider::{DivideError, ErrorKind};
use unit_harness::{ModuleScope, TestClass, TestMethod, assert_equal, assert_raises, test_methods};

use super::div;

/// Basic divide tests
pub struct BasicTest;

impl BasicTest {
    fn test_divide_integers(&mut self) -> anyhow::Result<()> {
        assert_equal(div(4, 2)?, 2_i64)?;
        Ok(())
    }

    fn test_divide_floats(&mut self) -> anyhow::Result<()> {
        assert_equal(div(4.0, 2.0)?, 2.0_f64)?;
        Ok(())
    }

    fn test_divide_by_zero(&mut self) -> anyhow::Result<()> {
        assert_raises(div(4, 0), DivideError::kind, ErrorKind::DivisionByZero)?;
        Ok(())
    }

    fn test_divide_by_string(&mut self) -> anyhow::Result<()> {
        assert_raises(div(4, "zero"), DivideError::kind, ErrorKind::TypeMismatch)?;
        Ok(())
    }

    /// Wrong on purpose: shows what a failing test looks like
    fn test_failing(&mut self) -> anyhow::Result<()> {
        assert_equal(div(4, 2)?, 1_i64)?;
        Ok(())
    }
}

impl TestClass for BasicTest {
    const NAME: &'static str = "BasicTest";

    fn set_up_class(_scope: &ModuleScope) -> anyhow::Result<Self> {
        Ok(Self)
    }

    fn methods() -> Vec<TestMethod<Self>> {
        test_methods![Self =>
            test_divide_integers,
            test_divide_floats,
            test_divide_by_zero,
            test_divide_by_string,
            test_failing,
        ]
    }
}
