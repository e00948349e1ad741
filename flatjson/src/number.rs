// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

/// A decoded JSON number, preserving the integer-vs-float distinction.
///
/// A literal containing `.`, `e`, or `E` decodes to [`Number::Float`];
/// every other literal decodes to [`Number::Int`]. The two kinds never
/// compare equal, so the distinction survives equality checks and round
/// trips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer literal that fits in an `i64`.
    Int(i64),
    /// Literal with a decimal point or exponent.
    Float(f64),
}

impl Number {
    /// Get the number as an `i64` if it was an integer literal.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(val) => Some(*val),
            Number::Float(_) => None,
        }
    }

    /// Get the number as an `f64`, widening integers.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(val) => *val as f64,
            Number::Float(val) => *val,
        }
    }

    /// Check if this number came from an integer literal.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Returns true if this number came from a literal with a decimal point
    /// or exponent.
    pub fn is_float(&self) -> bool {
        !self.is_integer()
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::Int(val) => write!(f, "{val}"),
            Number::Float(val) => write!(f, "{val}"),
        }
    }
}

impl From<i64> for Number {
    fn from(val: i64) -> Self {
        Number::Int(val)
    }
}

impl From<f64> for Number {
    fn from(val: f64) -> Self {
        Number::Float(val)
    }
}

/// Parses a number span the way the scanner classified it: float when a
/// `.`/`e`/`E` was seen, integer otherwise. Returns `None` for spans the
/// chosen numeric kind cannot represent (including non-finite floats).
pub(crate) fn parse_literal(raw: &str, float_like: bool) -> Option<Number> {
    if float_like {
        match f64::from_str(raw) {
            Ok(val) if val.is_finite() => Some(Number::Float(val)),
            _ => None,
        }
    } else {
        i64::from_str(raw).ok().map(Number::Int)
    }
}
