//! Error handling for division

use std::fmt;
use thiserror::Error;

/// Errors that can occur when dividing two operands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DivideError {
    /// The divisor was numeric zero
    #[error("division by zero")]
    DivisionByZero,

    /// At least one operand is not a number
    #[error("unsupported operand type(s) for /: '{dividend}' and '{divisor}'")]
    TypeMismatch {
        /// Type name of the dividend
        dividend: &'static str,
        /// Type name of the divisor
        divisor: &'static str,
    },
}

impl DivideError {
    /// The kind of failure, independent of the operands involved
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }
}

/// Kind of a [`DivideError`], used by test tables to name the expected failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Divisor was zero
    DivisionByZero,
    /// An operand was not numeric
    TypeMismatch,
}

impl ErrorKind {
    /// The classic xUnit exception name for this kind
    pub fn exception_name(self) -> &'static str {
        match self {
            Self::DivisionByZero => "ZeroDivisionError",
            Self::TypeMismatch => "TypeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.exception_name())
    }
}

/// Type alias for Results from division
pub type Result<T> = std::result::Result<T, DivideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DivideError::DivisionByZero.to_string(), "division by zero");

        let error = DivideError::TypeMismatch {
            dividend: "int",
            divisor: "str",
        };
        assert_eq!(
            error.to_string(),
            "unsupported operand type(s) for /: 'int' and 'str'"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(DivideError::DivisionByZero.kind(), ErrorKind::DivisionByZero);
        assert_eq!(
            DivideError::TypeMismatch {
                dividend: "str",
                divisor: "float"
            }
            .kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(ErrorKind::DivisionByZero.to_string(), "ZeroDivisionError");
        assert_eq!(ErrorKind::TypeMismatch.to_string(), "TypeError");
    }
}
