//! Numeric tokens with exact value equality.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::error::{EditError, Result};

/// A finite `f64` usable as a sequence token.
///
/// Two numbers are the same token iff their values are equal; `-0.0` is
/// normalized to `0.0` so that equality, ordering and hashing agree. NaN and
/// infinities are rejected because they have no meaningful distance.
///
/// The text form is the shortest representation that parses back to the
/// same value (`1.0`, `0.3`, `1e-7`).
///
/// ```rust
/// use wfst_edit::symbol::Number;
///
/// let a = Number::new(1.0).unwrap();
/// let b: Number = "1".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "1.0");
/// assert!(Number::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(try_from = "f64", into = "f64"))]
pub struct Number(f64);

impl Number {
    /// Create a numeric token, rejecting NaN and infinite values.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(EditError::InvalidNumber(value.to_string()));
        }
        // collapse -0.0 onto 0.0
        Ok(Self(value + 0.0))
    }

    /// The wrapped value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Absolute difference between two numbers.
    #[inline]
    pub fn abs_diff(self, other: Self) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl FromStr for Number {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| EditError::InvalidNumber(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<f64> for Number {
    type Error = EditError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.0
    }
}
