//! Division of dynamically typed operands.
//!
//! This crate is the system under test of the `unittest-rs`
//! demonstrations. It exposes a single operation, [`divide`], whose
//! behaviour is small enough to be covered completely by a handful of
//! tests, yet has enough edge cases (zero divisors, non-numeric operands,
//! int versus float results) to make the different test organisations
//! worth comparing.
//!
//! # Examples
//!
//! ```
//! use divider::{divide, ErrorKind, Operand, Quotient};
//!
//! // Exact integer division keeps integer type
//! let quotient = divide(&Operand::from(4), &Operand::from(2)).unwrap();
//! assert_eq!(quotient, Quotient::Int(2));
//!
//! // Any float operand gives a float quotient
//! let quotient = divide(&Operand::from(4.0), &Operand::from(2)).unwrap();
//! assert!(!quotient.is_int());
//! assert_eq!(quotient, 2.0_f64);
//!
//! let err = divide(&Operand::from(4), &Operand::from(0)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DivisionByZero);
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod types;

pub use error::{DivideError, ErrorKind, Result};
pub use types::{Operand, Quotient};

/// Divides `dividend` by `divisor`.
///
/// Operand types are checked before the divisor is inspected, so
/// `divide("a", 0)` is a type mismatch rather than a division by zero.
///
/// Two integers that divide exactly produce [`Quotient::Int`]; every other
/// numeric combination produces [`Quotient::Float`] using true division.
pub fn divide(dividend: &Operand, divisor: &Operand) -> Result<Quotient> {
    if !dividend.is_numeric() || !divisor.is_numeric() {
        log::trace!(
            "divide: rejecting {} / {}",
            dividend.type_name(),
            divisor.type_name()
        );
        return Err(DivideError::TypeMismatch {
            dividend: dividend.type_name(),
            divisor: divisor.type_name(),
        });
    }

    if divisor.is_zero() {
        log::trace!("divide: {} / zero", dividend);
        return Err(DivideError::DivisionByZero);
    }

    let quotient = match (dividend, divisor) {
        (Operand::Int(a), Operand::Int(b)) => divide_integers(*a, *b),
        _ => match (dividend.as_f64(), divisor.as_f64()) {
            (Some(a), Some(b)) => Quotient::Float(a / b),
            // Both operands were checked to be numeric above
            _ => {
                return Err(DivideError::TypeMismatch {
                    dividend: dividend.type_name(),
                    divisor: divisor.type_name(),
                });
            }
        },
    };

    log::trace!("divide: {} / {} = {}", dividend, divisor, quotient);
    Ok(quotient)
}

/// Integer division that stays integral only when it is exact
fn divide_integers(a: i64, b: i64) -> Quotient {
    match (a.checked_rem(b), a.checked_div(b)) {
        (Some(0), Some(quotient)) => Quotient::Int(quotient),
        _ => Quotient::Float(a as f64 / b as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn div(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Quotient> {
        divide(&a.into(), &b.into())
    }

    #[test]
    fn test_integer_division() {
        let quotient = div(4, 2).unwrap();
        assert!(quotient.is_int());
        assert_eq!(quotient, 2_i64);
        assert_ne!(quotient, 1_i64);
    }

    #[test]
    fn test_inexact_integer_division_is_float() {
        let quotient = div(7, 2).unwrap();
        assert!(!quotient.is_int());
        assert_eq!(quotient, 3.5_f64);
    }

    #[test]
    fn test_float_division() {
        assert_eq!(div(4.0, 2).unwrap(), Quotient::Float(2.0));
        assert_eq!(div(4, 2.0).unwrap(), Quotient::Float(2.0));
        assert!(!div(4.0, 2.0).unwrap().is_int());
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(div(4, 0), Err(DivideError::DivisionByZero));
        assert_eq!(div(4.0, 0), Err(DivideError::DivisionByZero));
        assert_eq!(div(4, -0.0), Err(DivideError::DivisionByZero));
    }

    #[test]
    fn test_type_mismatch_wins_over_zero() {
        let err = div("four", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            err,
            DivideError::TypeMismatch {
                dividend: "str",
                divisor: "int"
            }
        );
    }

    #[test]
    fn test_overflow_falls_back_to_float() {
        let quotient = div(i64::MIN, -1).unwrap();
        assert!(!quotient.is_int());
        assert_eq!(quotient, -(i64::MIN as f64));
    }
}
