//! Tropical semiring weights.

use std::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Relative tolerance used when comparing accumulated path weights.
pub const WEIGHT_DELTA: f64 = 1e-9;

/// A weight of the tropical (min, +) semiring.
///
/// - `⊗` ([`times`](Self::times)) is addition: the weight of a path is the
///   sum of its arc weights.
/// - `⊕` ([`plus`](Self::plus)) is minimum: the best of parallel paths.
/// - [`zero`](Self::zero) is `+∞` (no path), [`one`](Self::one) is `0`.
///
/// ```rust
/// use wfst_edit::fst::TropicalWeight;
///
/// let a = TropicalWeight::new(0.5);
/// let b = TropicalWeight::new(1.5);
/// assert_eq!(a.times(b).value(), 2.0);
/// assert_eq!(a.plus(b).value(), 0.5);
/// assert!(TropicalWeight::zero().is_zero());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(transparent))]
pub struct TropicalWeight(f64);

impl TropicalWeight {
    /// Wrap a raw weight.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The annihilator `+∞`: marks non-final states and unreachable ones.
    #[inline]
    pub const fn zero() -> Self {
        Self(f64::INFINITY)
    }

    /// The identity `0`.
    #[inline]
    pub const fn one() -> Self {
        Self(0.0)
    }

    /// Raw value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// `true` for `+∞`.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == f64::INFINITY
    }

    /// Semiring `⊕`: the smaller weight.
    #[inline]
    pub fn plus(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Semiring `⊗`: the sum of both weights.
    #[inline]
    pub fn times(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// `true` if `self` is strictly better than `other` beyond rounding noise.
    #[inline]
    pub fn improves_on(self, other: Self) -> bool {
        if other.is_zero() {
            return !self.is_zero();
        }
        self.0 < other.0 - tolerance(self.0, other.0)
    }

    /// Equality up to [`WEIGHT_DELTA`] relative tolerance.
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return self.is_zero() && other.is_zero();
        }
        (self.0 - other.0).abs() <= tolerance(self.0, other.0)
    }
}

#[inline]
fn tolerance(a: f64, b: f64) -> f64 {
    WEIGHT_DELTA * a.abs().max(b.abs()).max(1.0)
}

impl Default for TropicalWeight {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for TropicalWeight {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TropicalWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("Infinity")
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semiring_identities() {
        let w = TropicalWeight::new(0.7);
        assert_eq!(w.times(TropicalWeight::one()), w);
        assert_eq!(w.plus(TropicalWeight::zero()), w);
        assert!(w.times(TropicalWeight::zero()).is_zero());
    }

    #[test]
    fn test_approx_eq_absorbs_rounding() {
        let sum = TropicalWeight::new(0.1).times(TropicalWeight::new(0.2));
        assert!(sum.approx_eq(TropicalWeight::new(0.3)));
        assert!(!sum.improves_on(TropicalWeight::new(0.3)));
        assert!(!TropicalWeight::new(0.3).improves_on(sum));
        assert!(TropicalWeight::new(0.29).improves_on(sum));
    }

    #[test]
    fn test_improves_on_zero() {
        assert!(TropicalWeight::one().improves_on(TropicalWeight::zero()));
        assert!(!TropicalWeight::zero().improves_on(TropicalWeight::zero()));
    }

    #[test]
    fn test_display() {
        assert_eq!(TropicalWeight::new(1.5).to_string(), "1.5");
        assert_eq!(format!("{:.3}", TropicalWeight::new(1.0)), "1.000");
        assert_eq!(TropicalWeight::zero().to_string(), "Infinity");
    }
}
