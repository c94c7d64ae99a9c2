//! Soft substitution cost models.
//!
//! A [`CostModel`] decides, for a pair of tokens, whether a *soft*
//! substitution is offered and at which weight. Pairs without a soft weight
//! fall back to the flat miss penalty of the edit factors; shortest-path
//! selection adjudicates between the two whenever both exist.
//!
//! Three strategies are provided:
//!
//! - [`FlatCost`]: never offers a soft substitution (plain weighted
//!   Levenshtein).
//! - [`NumericThreshold`]: `|a - b|` for numbers closer than a threshold.
//! - [`KeyboardLayout`]: scaled key distance for letters that sit close
//!   together on a QWERTY keyboard.
//!
//! Any `Fn(&T, &T) -> Option<f64>` closure is a cost model as well.
//!
//! Cost models are evaluated once per run into a [`CostMatrix`], which the
//! factor builder then reuses.

mod keyboard;
mod matrix;
mod numeric;

pub use keyboard::{KeyboardLayout, DEFAULT_KEYBOARD_THRESHOLD, QWERTY_ROWS};
pub use matrix::CostMatrix;
pub use numeric::{NumericThreshold, DEFAULT_NUMERIC_THRESHOLD};

use crate::error::{EditError, Result};

/// Maps a pair of tokens to an optional non-negative soft substitution weight.
///
/// Implementations must be pure and deterministic: the same pair always
/// yields the same answer.
pub trait CostModel<T> {
    /// Weight of substituting `source` with `target`, or `None` if the pair
    /// is not close enough for a soft substitution.
    fn cost(&self, source: &T, target: &T) -> Option<f64>;
}

impl<T, F> CostModel<T> for F
where
    F: Fn(&T, &T) -> Option<f64>,
{
    #[inline]
    fn cost(&self, source: &T, target: &T) -> Option<f64> {
        self(source, target)
    }
}

/// Cost model that never offers a soft substitution.
///
/// Every substitution goes through the flat miss penalty, which yields
/// ordinary weighted Levenshtein distance.
///
/// ```rust
/// use wfst_edit::cost::{CostModel, FlatCost};
///
/// assert_eq!(FlatCost.cost(&'a', &'b'), None);
/// assert_eq!(std::mem::size_of::<FlatCost>(), 0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlatCost;

impl<T> CostModel<T> for FlatCost {
    #[inline(always)]
    fn cost(&self, _source: &T, _target: &T) -> Option<f64> {
        None
    }
}

/// Check that a distance threshold is finite and non-negative.
pub(crate) fn validate_threshold(threshold: f64) -> Result<f64> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(threshold)
    } else {
        Err(EditError::InvalidThreshold(threshold))
    }
}
