//! Operand and quotient types

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A dynamically typed operand of a division
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Operand {
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Any non-numeric value
    Text(String),
}

impl Operand {
    /// Name of the operand's type as it appears in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "str",
        }
    }

    /// Whether the operand takes part in arithmetic
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Whether the operand is numeric zero (`0`, `0.0` or `-0.0`)
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(value) => *value == 0,
            Self::Float(value) => *value == 0.0,
            Self::Text(_) => false,
        }
    }

    /// Numeric value widened to `f64`, if the operand is numeric
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parses integer literals as `Int`, finite float literals as `Float` and
/// everything else as `Text`, including `nan`, `inf` and literals that
/// overflow to infinity. Parsing never fails.
impl FromStr for Operand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self::Int(value));
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self::Float(value)),
            _ => Ok(Self::Text(s.to_string())),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write_float(f, *value),
            Self::Text(value) => write!(f, "'{value}'"),
        }
    }
}

/// Result of a successful division
///
/// Equality is numeric across variants, so `Quotient::Int(2)` equals
/// `Quotient::Float(2.0)`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Quotient {
    /// Exact quotient of two integers
    Int(i64),
    /// Quotient involving a float, or an inexact integer division
    Float(f64),
}

impl Quotient {
    /// The quotient widened to `f64`
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    /// Whether the quotient kept integer type
    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }
}

impl PartialEq for Quotient {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => int_eq_float(i, f),
        }
    }
}

/// 2^63, the first float above `i64::MAX`
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison: `f` must be integral, inside the `i64` range and equal
/// to `i` without rounding `i` to a float
fn int_eq_float(i: i64, f: f64) -> bool {
    f.fract() == 0.0 && (-I64_END..I64_END).contains(&f) && f as i64 == i
}

impl PartialEq<i64> for Quotient {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::Int(*other)
    }
}

impl PartialEq<f64> for Quotient {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::Float(*other)
    }
}

impl From<i64> for Quotient {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Quotient {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write_float(f, *value),
        }
    }
}

/// Integral floats keep a trailing `.0` so they read differently from ints
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_finite() && value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}
