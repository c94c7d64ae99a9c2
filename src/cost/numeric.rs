//! Numeric distance cost model.

use super::{validate_threshold, CostModel};
use crate::error::Result;
use crate::symbol::Number;

/// Default threshold of [`NumericThreshold`].
pub const DEFAULT_NUMERIC_THRESHOLD: f64 = 1.0;

/// Soft substitution between numbers closer than a threshold.
///
/// `cost(a, b) = |a - b|` if `|a - b| < threshold`, otherwise no soft
/// substitution. With threshold `0` no pair qualifies.
///
/// ```rust
/// use wfst_edit::cost::{CostModel, NumericThreshold};
/// use wfst_edit::symbol::Number;
///
/// let model = NumericThreshold::new(1.5).unwrap();
/// let n = |v| Number::new(v).unwrap();
/// assert_eq!(model.cost(&n(3.0), &n(4.0)), Some(1.0));
/// assert_eq!(model.cost(&n(3.0), &n(5.0)), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericThreshold {
    threshold: f64,
}

impl NumericThreshold {
    /// Create the model; fails if `threshold` is negative or not finite.
    pub fn new(threshold: f64) -> Result<Self> {
        Ok(Self {
            threshold: validate_threshold(threshold)?,
        })
    }

    /// The configured threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for NumericThreshold {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_NUMERIC_THRESHOLD,
        }
    }
}

impl CostModel<Number> for NumericThreshold {
    #[inline]
    fn cost(&self, source: &Number, target: &Number) -> Option<f64> {
        let distance = source.abs_diff(*target);
        (distance < self.threshold).then_some(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: f64) -> Number {
        Number::new(value).unwrap()
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(NumericThreshold::default().threshold(), 1.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let model = NumericThreshold::new(1.0).unwrap();
        assert_eq!(model.cost(&n(0.0), &n(1.0)), None);
        assert_eq!(model.cost(&n(0.0), &n(0.3)), Some(0.3));
    }

    #[test]
    fn test_symmetric() {
        let model = NumericThreshold::new(2.0).unwrap();
        assert_eq!(model.cost(&n(0.0), &n(1.8)), model.cost(&n(1.8), &n(0.0)));
    }

    #[test]
    fn test_zero_threshold_admits_nothing() {
        let model = NumericThreshold::new(0.0).unwrap();
        assert_eq!(model.cost(&n(1.0), &n(1.0)), None);
    }

    #[test]
    fn test_rejects_negative_threshold() {
        assert!(NumericThreshold::new(-1.0).is_err());
    }
}
