//! Precomputed soft substitution weights for one alignment run.

use std::collections::BTreeMap;

use super::CostModel;

/// Soft substitution weights between source and target tokens.
///
/// Only pairs admitted by the cost model are stored; absence of an entry
/// means the flat miss penalty is the only way to substitute the pair.
/// Candidates are restricted to tokens of the target sequence, since the
/// right factor cannot emit any other token.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix<T: Ord> {
    entries: BTreeMap<T, BTreeMap<T, f64>>,
}

impl<T: Ord + Clone> CostMatrix<T> {
    /// Evaluate `model` for every `(source, target)` pair.
    ///
    /// Negative and non-finite weights returned by `model` are discarded.
    pub fn build<'a, M, S, U>(model: &M, sources: S, targets: U) -> Self
    where
        M: CostModel<T> + ?Sized,
        S: IntoIterator<Item = &'a T>,
        U: IntoIterator<Item = &'a T> + Clone,
        T: 'a,
    {
        let mut entries = BTreeMap::new();
        for source in sources {
            let candidates: BTreeMap<T, f64> = targets
                .clone()
                .into_iter()
                .filter_map(|target| {
                    model
                        .cost(source, target)
                        .filter(|weight| weight.is_finite() && *weight >= 0.0)
                        .map(|weight| (target.clone(), weight))
                })
                .collect();
            if !candidates.is_empty() {
                entries.insert(source.clone(), candidates);
            }
        }
        Self { entries }
    }

    /// Soft candidates of `source`, in token order.
    pub fn candidates(&self, source: &T) -> impl Iterator<Item = (&T, f64)> + '_ {
        self.entries
            .get(source)
            .into_iter()
            .flat_map(|candidates| candidates.iter().map(|(target, weight)| (target, *weight)))
    }

    /// Soft weight for a specific pair.
    pub fn get(&self, source: &T, target: &T) -> Option<f64> {
        self.entries.get(source)?.get(target).copied()
    }

    /// Number of `(source, target)` pairs with a soft weight.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// `true` if no pair has a soft weight.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
