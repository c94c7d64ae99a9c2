//! Topological ordering of acyclic transducers.

use std::collections::VecDeque;

use super::{Arc, Fst, StateId};
use crate::error::{EditError, Result};

const UNVISITED: StateId = StateId::MAX;

/// Renumber the states of an acyclic `fst` in topological order.
///
/// Only states reachable from the start state are kept. In the result the
/// start state is `0` and every arc goes from a lower to a higher id, which
/// is what [`shortest_distance`](super::shortest_distance) relies on for its
/// single relaxation pass. Ties are broken by original state id, so the
/// numbering is deterministic.
///
/// Fails with [`EditError::Cyclic`] if a cycle is reachable from the start.
pub fn topological_order(fst: &Fst) -> Result<Fst> {
    let mut result = Fst::new();
    let Some(start) = fst.start() else {
        return Ok(result);
    };

    let reachable = reachable_from(fst, start);

    let mut in_degree = vec![0usize; fst.num_states()];
    for state in fst.states().filter(|&s| reachable[s as usize]) {
        for arc in fst.arcs(state) {
            in_degree[arc.nextstate as usize] += 1;
        }
    }

    let mut order: Vec<StateId> = Vec::new();
    let mut ready: VecDeque<StateId> = VecDeque::new();
    if in_degree[start as usize] == 0 {
        ready.push_back(start);
    }
    while let Some(state) = ready.pop_front() {
        order.push(state);
        let mut successors: Vec<StateId> = Vec::new();
        for arc in fst.arcs(state) {
            let degree = &mut in_degree[arc.nextstate as usize];
            *degree -= 1;
            if *degree == 0 {
                successors.push(arc.nextstate);
            }
        }
        successors.sort_unstable();
        ready.extend(successors);
    }

    let reachable_count = reachable.iter().filter(|&&r| r).count();
    if order.len() < reachable_count {
        return Err(EditError::Cyclic);
    }

    let mut renumbered = vec![UNVISITED; fst.num_states()];
    for &state in &order {
        renumbered[state as usize] = result.add_state();
    }
    result.set_start(renumbered[start as usize]);
    for &state in &order {
        let new_state = renumbered[state as usize];
        for arc in fst.arcs(state) {
            result.add_arc(
                new_state,
                Arc::new(arc.ilabel, arc.olabel, arc.weight, renumbered[arc.nextstate as usize]),
            );
        }
        let final_weight = fst.final_weight(state);
        if !final_weight.is_zero() {
            result.set_final(new_state, final_weight);
        }
    }
    Ok(result)
}

fn reachable_from(fst: &Fst, start: StateId) -> Vec<bool> {
    let mut reachable = vec![false; fst.num_states()];
    let mut stack = vec![start];
    reachable[start as usize] = true;
    while let Some(state) = stack.pop() {
        for arc in fst.arcs(state) {
            if !reachable[arc.nextstate as usize] {
                reachable[arc.nextstate as usize] = true;
                stack.push(arc.nextstate);
            }
        }
    }
    reachable
}
