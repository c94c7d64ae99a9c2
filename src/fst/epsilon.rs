//! Epsilon removal.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use super::{Arc, Fst, StateId, TropicalWeight};

/// Return an equivalent transducer without `ε:ε` arcs.
///
/// For every state `q`, the shortest `ε:ε` distance `d(q, p)` to each state
/// `p` of its epsilon closure is computed; `q` then receives every non-epsilon
/// arc of `p` with weight `d(q, p) ⊗ w`, and final weight
/// `⊕ d(q, p) ⊗ final(p)`. State ids are preserved, so states only reachable
/// through epsilons become unreachable but remain in the result.
///
/// Arcs with a single epsilon side (`ε:x` or `x:ε`) are kept: they consume
/// or emit a real symbol.
pub fn remove_epsilons(fst: &Fst) -> Fst {
    if !fst.has_epsilons() {
        return fst.clone();
    }

    let mut result = Fst::new();
    for _ in fst.states() {
        result.add_state();
    }
    if let Some(start) = fst.start() {
        result.set_start(start);
    }

    for state in fst.states() {
        let closure = epsilon_closure(fst, state);
        let mut final_weight = TropicalWeight::zero();
        // deterministic arc order regardless of hash iteration
        let mut members: Vec<(StateId, TropicalWeight)> = closure.into_iter().collect();
        members.sort_by_key(|&(member, _)| member);

        for (member, distance) in members {
            final_weight = final_weight.plus(distance.times(fst.final_weight(member)));
            for arc in fst.arcs(member).iter().filter(|a| !a.is_epsilon()) {
                result.add_arc(
                    state,
                    Arc::new(arc.ilabel, arc.olabel, distance.times(arc.weight), arc.nextstate),
                );
            }
        }
        if !final_weight.is_zero() {
            result.set_final(state, final_weight);
        }
    }

    log::trace!(
        "removed epsilons: {} arcs -> {} arcs",
        fst.num_arcs(),
        result.num_arcs()
    );
    result
}

/// Shortest `ε:ε` distances from `source`, including `source` itself at `one`.
///
/// Label-correcting relaxation; terminates because weights are non-negative
/// and a state is only re-queued on strict improvement.
fn epsilon_closure(fst: &Fst, source: StateId) -> FxHashMap<StateId, TropicalWeight> {
    let mut distances = FxHashMap::default();
    distances.insert(source, TropicalWeight::one());
    let mut queue = VecDeque::from([source]);

    while let Some(state) = queue.pop_front() {
        let here = distances[&state];
        for arc in fst.arcs(state).iter().filter(|a| a.is_epsilon()) {
            let candidate = here.times(arc.weight);
            let current = distances
                .get(&arc.nextstate)
                .copied()
                .unwrap_or_else(TropicalWeight::zero);
            if candidate.improves_on(current) {
                distances.insert(arc.nextstate, candidate);
                queue.push_back(arc.nextstate);
            }
        }
    }
    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::EPSILON;

    #[test]
    fn test_no_epsilons_is_identity() {
        let mut fst = Fst::new();
        let s0 = fst.add_state();
        let s1 = fst.add_state();
        fst.set_start(s0);
        fst.add_arc(s0, Arc::new(4, EPSILON, 1.0, s1));
        fst.set_final(s1, 0.0);

        let result = remove_epsilons(&fst);
        assert_eq!(result.num_arcs(), 1);
        assert_eq!(result.arcs(s0)[0].olabel, EPSILON);
    }

    #[test]
    fn test_epsilon_chain_is_bypassed() {
        // 0 -ε/0.5-> 1 -4/1.0-> 2 (final), and 0 -ε/0.25-> 2
        let mut fst = Fst::new();
        let s0 = fst.add_state();
        let s1 = fst.add_state();
        let s2 = fst.add_state();
        fst.set_start(s0);
        fst.add_arc(s0, Arc::new(EPSILON, EPSILON, 0.5, s1));
        fst.add_arc(s0, Arc::new(EPSILON, EPSILON, 0.25, s2));
        fst.add_arc(s1, Arc::new(4, 4, 1.0, s2));
        fst.set_final(s2, 0.0);

        let result = remove_epsilons(&fst);
        assert!(!result.has_epsilons());
        let arcs = result.arcs(s0);
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].ilabel, 4);
        assert!(arcs[0].weight.approx_eq(TropicalWeight::new(1.5)));
        assert!(result.final_weight(s0).approx_eq(TropicalWeight::new(0.25)));
    }

    #[test]
    fn test_epsilon_cycle_terminates() {
        let mut fst = Fst::new();
        let s0 = fst.add_state();
        let s1 = fst.add_state();
        fst.set_start(s0);
        fst.add_arc(s0, Arc::new(EPSILON, EPSILON, 0.0, s1));
        fst.add_arc(s1, Arc::new(EPSILON, EPSILON, 0.0, s0));
        fst.set_final(s1, 2.0);

        let result = remove_epsilons(&fst);
        assert_eq!(result.num_arcs(), 0);
        assert!(result.final_weight(s0).approx_eq(TropicalWeight::new(2.0)));
    }
}
