//! Testing without a framework
//!
//! The checks still test the code, but there is no reporting and the first
//! failing check stops everything after it.

use divider::{DivideError, ErrorKind};
use unit_harness::{AssertionExt, Script, assert_equal, assert_raises};

use super::div;

/// The script: four passing checks and a deliberately wrong last one
pub fn script() -> Script<'static> {
    Script::new()
        // trivial integer division
        .check("divide integers", || {
            assert_equal(div(4, 2)?, 2_i64).with_message("4/2 should be 2!")?;
            Ok(())
        })
        // trivial floating point division
        .check("divide floats", || {
            assert_equal(div(4.0, 2)?, 2.0_f64).with_message("4.0/2.0 should be 2.0!")?;
            Ok(())
        })
        .check("divide by zero", || {
            assert_raises(div(4, 0), DivideError::kind, ErrorKind::DivisionByZero)?;
            Ok(())
        })
        .check("divide by string", || {
            assert_raises(div(4, "zero"), DivideError::kind, ErrorKind::TypeMismatch)?;
            Ok(())
        })
        .check("failing check", || {
            assert_equal(div(4, 2)?, 1_i64).with_message("4/2 should be 1!")?;
            Ok(())
        })
}
