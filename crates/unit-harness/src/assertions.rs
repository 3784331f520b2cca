//! Result-returning assertions
//!
//! Unlike `assert!`, these never panic. A failed check is an
//! [`AssertionFailed`] error, so `?` ends the enclosing test body and the
//! runner can tell a failure apart from any other error.

use std::fmt::Display;
use thiserror::Error;

/// A failed assertion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailed {
    /// Human readable description of the failure
    pub message: String,
}

impl AssertionFailed {
    /// Create a failure with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Append a custom message, `unittest` style: `2 != 1 : 4/2 should be 1!`
    #[must_use]
    pub fn with_message(self, message: &str) -> Self {
        Self {
            message: format!("{} : {}", self.message, message),
        }
    }
}

/// Result of a single assertion
pub type CheckResult = Result<(), AssertionFailed>;

/// Attach a custom message to a failed assertion
pub trait AssertionExt {
    /// Append `message` to the failure, if any
    #[must_use]
    fn with_message(self, message: &str) -> Self;
}

impl AssertionExt for CheckResult {
    fn with_message(self, message: &str) -> Self {
        self.map_err(|failure| failure.with_message(message))
    }
}

/// Check that `actual == expected`
pub fn assert_equal<T, U>(actual: T, expected: U) -> CheckResult
where
    T: PartialEq<U> + Display,
    U: Display,
{
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionFailed::new(format!("{actual} != {expected}")))
    }
}

/// Check that `actual != unexpected`
pub fn assert_not_equal<T, U>(actual: T, unexpected: U) -> CheckResult
where
    T: PartialEq<U> + Display,
    U: Display,
{
    if actual == unexpected {
        Err(AssertionFailed::new(format!("{actual} == {unexpected}")))
    } else {
        Ok(())
    }
}

/// Check that `condition` holds
pub fn assert_true(condition: bool) -> CheckResult {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailed::new("False is not true"))
    }
}

/// Check that `condition` does not hold
pub fn assert_false(condition: bool) -> CheckResult {
    if condition {
        Err(AssertionFailed::new("True is not false"))
    } else {
        Ok(())
    }
}

/// Check that `result` is an error whose kind equals `expected`
///
/// `kind_of` maps the error to something comparable, typically an
/// error-kind enum.
pub fn assert_raises<T, E, K>(result: Result<T, E>, kind_of: impl Fn(&E) -> K, expected: K) -> CheckResult
where
    T: Display,
    E: Display,
    K: PartialEq + Display,
{
    match result {
        Ok(value) => Err(AssertionFailed::new(format!(
            "{expected} not raised (got {value})"
        ))),
        Err(err) => {
            let actual = kind_of(&err);
            if actual == expected {
                Ok(())
            } else {
                Err(AssertionFailed::new(format!(
                    "expected {expected}, got {actual}: {err}"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_equal() {
        assert!(assert_equal(2, 2).is_ok());
        assert_eq!(
            assert_equal(2, 1),
            Err(AssertionFailed::new("2 != 1"))
        );
    }

    #[test]
    fn test_assert_not_equal() {
        assert!(assert_not_equal("a", "b").is_ok());
        assert_eq!(
            assert_not_equal(1, 1).unwrap_err().message,
            "1 == 1"
        );
    }

    #[test]
    fn test_assert_true_false() {
        assert!(assert_true(true).is_ok());
        assert!(assert_true(false).is_err());
        assert!(assert_false(false).is_ok());
        assert_eq!(assert_false(true).unwrap_err().message, "True is not false");
    }

    #[test]
    fn test_with_message() {
        let result = assert_equal(2, 1).with_message("4/2 should be 1!");
        assert_eq!(result.unwrap_err().message, "2 != 1 : 4/2 should be 1!");

        let result = assert_equal(2, 2).with_message("never shown");
        assert!(result.is_ok());
    }

    #[test]
    fn test_assert_raises() {
        let err: Result<u8, String> = Err("boom".to_string());
        assert!(assert_raises(err, |e| e.len(), 4).is_ok());

        let err: Result<u8, String> = Err("boom".to_string());
        assert_eq!(
            assert_raises(err, |e| e.len(), 3).unwrap_err().message,
            "expected 3, got 4: boom"
        );

        let ok: Result<u8, String> = Ok(7);
        assert_eq!(
            assert_raises(ok, |e| e.len(), 4).unwrap_err().message,
            "4 not raised (got 7)"
        );
    }
}
