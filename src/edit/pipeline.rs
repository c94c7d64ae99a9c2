//! Composition of acceptors and edit factors into one edit lattice.

use crate::cost::CostMatrix;
use crate::error::Result;
use crate::fst::{ArcSortType, Fst, Runtime};
use crate::symbol::{SymbolTable, Token};

use super::acceptor::build_acceptor;
use super::factor::{left_factor, right_factor, Penalties};

/// Build the full edit lattice between `source` and `target`.
///
/// ```text
/// left_full  = source_acceptor ∘ left_factor     (output-sorted)
/// right_full = right_factor ∘ target_acceptor    (input-sorted)
/// full       = topsort(rmepsilon(left_full ∘ right_full))
/// ```
///
/// Every path of the result reads `source` and writes `target`; its weight
/// is the cost of the edit script it spells. The result is acyclic and
/// topologically sorted.
pub fn build_lattice<T, R>(
    runtime: &R,
    table: &SymbolTable<T>,
    source: &[T],
    target: &[T],
    matrix: &CostMatrix<T>,
    penalties: &Penalties,
) -> Result<Fst>
where
    T: Token,
    R: Runtime + ?Sized,
{
    let source_acceptor = build_acceptor(source, table)?;
    let target_acceptor = build_acceptor(target, table)?;
    let left = left_factor(table, source, target, matrix, penalties)?;
    let right = right_factor(table, target, penalties)?;

    let left_full = runtime
        .compose(&source_acceptor, &left)
        .arc_sorted(ArcSortType::Output);
    log::debug!(
        "left composition: {} states, {} arcs",
        left_full.num_states(),
        left_full.num_arcs()
    );

    let right_full = runtime
        .compose(&right, &target_acceptor)
        .arc_sorted(ArcSortType::Input);
    log::debug!(
        "right composition: {} states, {} arcs",
        right_full.num_states(),
        right_full.num_arcs()
    );

    let full = runtime.compose(&left_full, &right_full);
    log::debug!(
        "full composition: {} states, {} arcs",
        full.num_states(),
        full.num_arcs()
    );

    let full = runtime.remove_epsilons(&full);
    let full = runtime.topological_order(&full)?;
    log::debug!(
        "edit lattice: {} states, {} arcs",
        full.num_states(),
        full.num_arcs()
    );
    Ok(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::FlatCost;
    use crate::fst::{NativeRuntime, TropicalWeight};

    fn lattice(source: &str, target: &str) -> (Fst, SymbolTable<char>) {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        let table = SymbolTable::build(source.iter().chain(&target).copied()).unwrap();
        let matrix = CostMatrix::build(&FlatCost, &source, &target);
        let fst = build_lattice(
            &NativeRuntime,
            &table,
            &source,
            &target,
            &matrix,
            &Penalties::default(),
        )
        .unwrap();
        (fst, table)
    }

    fn total(fst: &Fst) -> TropicalWeight {
        let distances = NativeRuntime.shortest_distance(fst);
        fst.final_states()
            .map(|s| distances[s as usize].times(fst.final_weight(s)))
            .fold(TropicalWeight::zero(), TropicalWeight::plus)
    }

    #[test]
    fn test_lattice_is_sorted_dag() {
        let (fst, _) = lattice("ab", "ba");
        assert!(fst.is_topologically_sorted());
        assert!(!fst.has_epsilons());
        assert_eq!(fst.start(), Some(0));
    }

    #[test]
    fn test_lattice_labels_are_tokens_or_epsilon() {
        let (fst, table) = lattice("abc", "axc");
        assert_eq!(fst.find_invalid_label(|l| table.contains_label(l)), None);
        for state in fst.states() {
            for arc in fst.arcs(state) {
                assert!(arc.ilabel == 0 || table.token(arc.ilabel).is_some());
                assert!(arc.olabel == 0 || table.token(arc.olabel).is_some());
            }
        }
    }

    #[test]
    fn test_lattice_distances() {
        assert!(total(&lattice("abc", "abc").0).approx_eq(TropicalWeight::new(0.0)));
        assert!(total(&lattice("abc", "axc").0).approx_eq(TropicalWeight::new(1.0)));
        assert!(total(&lattice("abc", "").0).approx_eq(TropicalWeight::new(3.0)));
        assert!(total(&lattice("", "ab").0).approx_eq(TropicalWeight::new(2.0)));
        assert!(total(&lattice("", "").0).approx_eq(TropicalWeight::new(0.0)));
    }
}
