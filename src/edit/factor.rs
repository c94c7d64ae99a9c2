//! Edit factor transducers.
//!
//! Edit operations are split into two single-state transducers that meet in
//! the middle on *operation labels*:
//!
//! - the **left factor** reads a source token and writes either a target
//!   token (copy or soft substitution) or one of the control symbols
//!   `<sub>`, `<del>`, `<ins>`;
//! - the **right factor** reads a target token or a control symbol and
//!   writes the target token (or nothing, for `<del>`).
//!
//! Each flat penalty is split in half between the two factors, so a miss,
//! insertion or deletion costs its full penalty once both halves are
//! composed.

use std::collections::BTreeSet;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::cost::CostMatrix;
use crate::error::{EditError, Result};
use crate::fst::{Arc, ArcSortType, Fst};
use crate::symbol::{SymbolTable, Token, DELETE, EPSILON, INSERT, SUBSTITUTE};

/// Flat penalties of the three edit operations.
///
/// All three default to `1.0`, which together with
/// [`FlatCost`](crate::cost::FlatCost) yields unit-cost Levenshtein
/// distance.
///
/// ```rust
/// use wfst_edit::edit::Penalties;
///
/// let penalties = Penalties::new(2.0, 1.0, 1.0).unwrap();
/// assert_eq!(penalties.miss(), 2.0);
/// assert!(Penalties::new(-1.0, 1.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(try_from = "RawPenalties"))]
pub struct Penalties {
    miss: f64,
    insertion: f64,
    deletion: f64,
}

impl Penalties {
    /// Create validated penalties.
    ///
    /// Fails with [`EditError::InvalidPenalty`] if any value is negative or
    /// not finite.
    pub fn new(miss: f64, insertion: f64, deletion: f64) -> Result<Self> {
        Ok(Self {
            miss: validate_penalty("miss", miss)?,
            insertion: validate_penalty("insertion", insertion)?,
            deletion: validate_penalty("deletion", deletion)?,
        })
    }

    /// Penalty of a substitution without a soft weight.
    #[inline]
    pub fn miss(&self) -> f64 {
        self.miss
    }

    /// Penalty of inserting a target token.
    #[inline]
    pub fn insertion(&self) -> f64 {
        self.insertion
    }

    /// Penalty of deleting a source token.
    #[inline]
    pub fn deletion(&self) -> f64 {
        self.deletion
    }
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            miss: 1.0,
            insertion: 1.0,
            deletion: 1.0,
        }
    }
}

#[cfg(feature = "serialization")]
#[derive(Deserialize)]
struct RawPenalties {
    miss: f64,
    insertion: f64,
    deletion: f64,
}

#[cfg(feature = "serialization")]
impl TryFrom<RawPenalties> for Penalties {
    type Error = EditError;

    fn try_from(raw: RawPenalties) -> Result<Self> {
        Penalties::new(raw.miss, raw.insertion, raw.deletion)
    }
}

fn validate_penalty(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EditError::InvalidPenalty { name, value })
    }
}

fn single_state() -> (Fst, u32) {
    let mut fst = Fst::new();
    let state = fst.add_state();
    fst.set_start(state);
    fst.set_final(state, 0.0);
    (fst, state)
}

/// Build the left factor: source token to operation label.
///
/// For every distinct source token `t`:
///
/// - `t:u / w` for each soft candidate `(u, w)` of `t` in `matrix`;
/// - `t:t / 0` if `t` also occurs in the target and `matrix` has no entry
///   for `(t, t)`;
/// - `t:<sub> / miss/2` and `t:<del> / deletion/2`.
///
/// Plus a single `ε:<ins> / insertion/2` arc. The result is output-sorted.
pub fn left_factor<T: Token>(
    table: &SymbolTable<T>,
    sources: &[T],
    targets: &[T],
    matrix: &CostMatrix<T>,
    penalties: &Penalties,
) -> Result<Fst> {
    let (mut fst, state) = single_state();
    let target_set: BTreeSet<&T> = targets.iter().collect();

    for source in sources.iter().collect::<BTreeSet<_>>() {
        let id = table.require_id(source)?;
        for (target, weight) in matrix.candidates(source) {
            fst.add_arc(state, Arc::new(id, table.require_id(target)?, weight, state));
        }
        if target_set.contains(source) && matrix.get(source, source).is_none() {
            fst.add_arc(state, Arc::new(id, id, 0.0, state));
        }
        fst.add_arc(state, Arc::new(id, SUBSTITUTE, penalties.miss / 2.0, state));
        fst.add_arc(state, Arc::new(id, DELETE, penalties.deletion / 2.0, state));
    }
    fst.add_arc(state, Arc::new(EPSILON, INSERT, penalties.insertion / 2.0, state));

    log::trace!("left factor: {} arcs", fst.num_arcs());
    Ok(fst.arc_sorted(ArcSortType::Output))
}

/// Build the right factor: operation label to target token.
///
/// For every distinct target token `u`: `u:u / 0`, `<sub>:u / miss/2` and
/// `<ins>:u / insertion/2`. Plus a single `<del>:ε / deletion/2` arc. The
/// result is input-sorted.
pub fn right_factor<T: Token>(
    table: &SymbolTable<T>,
    targets: &[T],
    penalties: &Penalties,
) -> Result<Fst> {
    let (mut fst, state) = single_state();

    for target in targets.iter().collect::<BTreeSet<_>>() {
        let id = table.require_id(target)?;
        fst.add_arc(state, Arc::new(id, id, 0.0, state));
        fst.add_arc(state, Arc::new(SUBSTITUTE, id, penalties.miss / 2.0, state));
        fst.add_arc(state, Arc::new(INSERT, id, penalties.insertion / 2.0, state));
    }
    fst.add_arc(state, Arc::new(DELETE, EPSILON, penalties.deletion / 2.0, state));

    log::trace!("right factor: {} arcs", fst.num_arcs());
    Ok(fst.arc_sorted(ArcSortType::Input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{FlatCost, NumericThreshold};
    use crate::fst::TropicalWeight;
    use crate::symbol::Number;

    fn numbers(values: &[f64]) -> Vec<Number> {
        values.iter().map(|&v| Number::new(v).unwrap()).collect()
    }

    fn find(fst: &Fst, ilabel: u32, olabel: u32) -> Vec<TropicalWeight> {
        fst.arcs(0)
            .iter()
            .filter(|a| a.ilabel == ilabel && a.olabel == olabel)
            .map(|a| a.weight)
            .collect()
    }

    #[test]
    fn test_penalties_validation() {
        assert!(Penalties::new(0.0, 0.0, 0.0).is_ok());
        assert!(matches!(
            Penalties::new(1.0, f64::NAN, 1.0),
            Err(EditError::InvalidPenalty { name: "insertion", .. })
        ));
        assert!(matches!(
            Penalties::new(1.0, 1.0, f64::INFINITY),
            Err(EditError::InvalidPenalty { name: "deletion", .. })
        ));
        assert_eq!(Penalties::default(), Penalties::new(1.0, 1.0, 1.0).unwrap());
    }

    #[test]
    fn test_left_factor_flat() {
        let source: Vec<char> = "ab".chars().collect();
        let target: Vec<char> = "bc".chars().collect();
        let table = SymbolTable::build(source.iter().chain(&target).copied()).unwrap();
        let matrix = CostMatrix::build(&FlatCost, &source, &target);
        let penalties = Penalties::new(2.0, 4.0, 6.0).unwrap();

        let fst = left_factor(&table, &source, &target, &matrix, &penalties).unwrap();
        let (a, b) = (table.id(&'a').unwrap(), table.id(&'b').unwrap());

        // copy only for the shared token
        assert!(find(&fst, a, a).is_empty());
        assert_eq!(find(&fst, b, b), vec![TropicalWeight::new(0.0)]);
        assert_eq!(find(&fst, a, SUBSTITUTE), vec![TropicalWeight::new(1.0)]);
        assert_eq!(find(&fst, b, DELETE), vec![TropicalWeight::new(3.0)]);
        assert_eq!(find(&fst, EPSILON, INSERT), vec![TropicalWeight::new(2.0)]);
        assert_eq!(fst.num_arcs(), 6);
        assert_eq!(fst.sort_type(), Some(ArcSortType::Output));
        assert!(fst.is_final(0));
    }

    #[test]
    fn test_left_factor_soft_arcs_replace_copy() {
        let source = numbers(&[1.0, 3.0]);
        let target = numbers(&[1.0, 3.5]);
        let table = SymbolTable::build(source.iter().chain(&target).copied()).unwrap();
        let model = NumericThreshold::new(1.0).unwrap();
        let matrix = CostMatrix::build(&model, &source, &target);

        let fst =
            left_factor(&table, &source, &target, &matrix, &Penalties::default()).unwrap();
        let id = |v: f64| table.id(&Number::new(v).unwrap()).unwrap();

        // (1, 1) comes from the matrix at weight 0, no duplicate copy arc
        assert_eq!(find(&fst, id(1.0), id(1.0)), vec![TropicalWeight::new(0.0)]);
        assert_eq!(find(&fst, id(3.0), id(3.5)), vec![TropicalWeight::new(0.5)]);
        assert!(find(&fst, id(1.0), id(3.5)).is_empty());
    }

    #[test]
    fn test_right_factor() {
        let target: Vec<char> = "aba".chars().collect();
        let table = SymbolTable::build(target.iter().copied()).unwrap();
        let fst = right_factor(&table, &target, &Penalties::default()).unwrap();
        let a = table.id(&'a').unwrap();

        // two distinct tokens, three arcs each, plus the deletion arc
        assert_eq!(fst.num_arcs(), 7);
        assert_eq!(find(&fst, a, a), vec![TropicalWeight::new(0.0)]);
        assert_eq!(find(&fst, SUBSTITUTE, a), vec![TropicalWeight::new(0.5)]);
        assert_eq!(find(&fst, INSERT, a), vec![TropicalWeight::new(0.5)]);
        assert_eq!(find(&fst, DELETE, EPSILON), vec![TropicalWeight::new(0.5)]);
        assert_eq!(fst.sort_type(), Some(ArcSortType::Input));
    }

    #[test]
    fn test_factor_rejects_unknown_token() {
        let table = SymbolTable::build("a".chars()).unwrap();
        let err = right_factor(&table, &['a', 'q'], &Penalties::default()).unwrap_err();
        assert!(matches!(err, EditError::UnknownToken(_)));
    }
}
