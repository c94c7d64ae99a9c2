//! Capability interface over a weighted transducer engine.

use super::{Fst, TropicalWeight};
use crate::error::Result;

/// The automaton operations the alignment pipeline needs.
///
/// Implement this trait to run alignments on another weighted-FST engine.
/// Implementations must be deterministic: the same inputs must yield the
/// same automata, and in particular the same shortest path under the
/// tie-break documented on [`shortest_path`](super::shortest_path).
pub trait Runtime {
    /// Compose `a` with `b` (see [`compose`](super::compose)).
    fn compose(&self, a: &Fst, b: &Fst) -> Fst;

    /// Remove `ε:ε` arcs (see [`remove_epsilons`](super::remove_epsilons)).
    fn remove_epsilons(&self, fst: &Fst) -> Fst;

    /// Renumber an acyclic automaton in topological order.
    fn topological_order(&self, fst: &Fst) -> Result<Fst>;

    /// Extract one minimum-weight path as a linear automaton.
    fn shortest_path(&self, fst: &Fst) -> Result<Fst>;

    /// Shortest distance from the start state to every state.
    fn shortest_distance(&self, fst: &Fst) -> Vec<TropicalWeight>;
}

/// The in-crate runtime, backed by the functions of [`crate::fst`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NativeRuntime;

impl Runtime for NativeRuntime {
    #[inline]
    fn compose(&self, a: &Fst, b: &Fst) -> Fst {
        super::compose(a, b)
    }

    #[inline]
    fn remove_epsilons(&self, fst: &Fst) -> Fst {
        super::remove_epsilons(fst)
    }

    #[inline]
    fn topological_order(&self, fst: &Fst) -> Result<Fst> {
        super::topological_order(fst)
    }

    #[inline]
    fn shortest_path(&self, fst: &Fst) -> Result<Fst> {
        super::shortest_path(fst)
    }

    #[inline]
    fn shortest_distance(&self, fst: &Fst) -> Vec<TropicalWeight> {
        super::shortest_distance(fst)
    }
}

impl<R: Runtime + ?Sized> Runtime for &R {
    fn compose(&self, a: &Fst, b: &Fst) -> Fst {
        (**self).compose(a, b)
    }

    fn remove_epsilons(&self, fst: &Fst) -> Fst {
        (**self).remove_epsilons(fst)
    }

    fn topological_order(&self, fst: &Fst) -> Result<Fst> {
        (**self).topological_order(fst)
    }

    fn shortest_path(&self, fst: &Fst) -> Result<Fst> {
        (**self).shortest_path(fst)
    }

    fn shortest_distance(&self, fst: &Fst) -> Vec<TropicalWeight> {
        (**self).shortest_distance(fst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::Arc;

    fn two_step() -> Fst {
        let mut fst = Fst::new();
        let s0 = fst.add_state();
        let s1 = fst.add_state();
        let s2 = fst.add_state();
        fst.set_start(s0);
        fst.add_arc(s0, Arc::new(4, 4, 0.5, s1));
        fst.add_arc(s1, Arc::new(5, 5, 0.25, s2));
        fst.set_final(s2, 0.0);
        fst
    }

    #[test]
    fn test_native_runtime_delegates() {
        let runtime = NativeRuntime;
        let fst = two_step();

        let composed = runtime.compose(&fst, &fst);
        assert_eq!(composed.num_arcs(), 2);

        let distances = runtime.shortest_distance(&fst);
        assert!(distances[2].approx_eq(TropicalWeight::new(0.75)));

        let path = runtime.shortest_path(&fst).unwrap();
        assert_eq!(path.num_arcs(), 2);
        assert!(runtime.topological_order(&fst).unwrap().is_topologically_sorted());
        assert_eq!(runtime.remove_epsilons(&fst).num_arcs(), 2);
    }

    #[test]
    fn test_runtime_by_reference() {
        fn total<R: Runtime>(runtime: R, fst: &Fst) -> TropicalWeight {
            runtime.shortest_distance(fst)[2]
        }
        let runtime = NativeRuntime;
        assert!(total(&runtime, &two_step()).approx_eq(TropicalWeight::new(0.75)));
    }
}
