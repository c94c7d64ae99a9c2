//! Shortest distance and shortest path over the tropical semiring.

use std::collections::VecDeque;

use super::{topological_order, Arc, Fst, StateId, TropicalWeight};
use crate::error::{EditError, Result};

/// Shortest distance from the start state to every state.
///
/// Entry `q` is the minimum path weight from the start to `q`, or
/// [`TropicalWeight::zero`] if `q` is unreachable. A topologically sorted
/// transducer is relaxed in one pass; anything else falls back to
/// label-correcting relaxation, which is exact for non-negative weights.
pub fn shortest_distance(fst: &Fst) -> Vec<TropicalWeight> {
    let mut distances = vec![TropicalWeight::zero(); fst.num_states()];
    let Some(start) = fst.start() else {
        return distances;
    };
    distances[start as usize] = TropicalWeight::one();

    if fst.is_topologically_sorted() {
        for state in fst.states() {
            let here = distances[state as usize];
            if here.is_zero() {
                continue;
            }
            for arc in fst.arcs(state) {
                let next = &mut distances[arc.nextstate as usize];
                *next = next.plus(here.times(arc.weight));
            }
        }
        return distances;
    }

    let mut queued = vec![false; fst.num_states()];
    let mut queue = VecDeque::from([start]);
    queued[start as usize] = true;
    while let Some(state) = queue.pop_front() {
        queued[state as usize] = false;
        let here = distances[state as usize];
        for arc in fst.arcs(state) {
            let candidate = here.times(arc.weight);
            let next = arc.nextstate as usize;
            if candidate.improves_on(distances[next]) {
                distances[next] = candidate;
                if !queued[next] {
                    queued[next] = true;
                    queue.push_back(arc.nextstate);
                }
            }
        }
    }
    distances
}

/// Shortest distance from every state to a final state, for a topologically
/// sorted `fst`.
fn distance_to_final(fst: &Fst) -> Vec<TropicalWeight> {
    let mut distances = vec![TropicalWeight::zero(); fst.num_states()];
    for state in fst.states().rev() {
        let mut best = fst.final_weight(state);
        for arc in fst.arcs(state) {
            best = best.plus(arc.weight.times(distances[arc.nextstate as usize]));
        }
        distances[state as usize] = best;
    }
    distances
}

/// Extract one minimum-weight path as a linear transducer.
///
/// The result has states `0..=n` for a path of `n` arcs, start `0` and the
/// last state final with the final weight of the path's end state. If the
/// input is not topologically sorted it is sorted first, failing with
/// [`EditError::Cyclic`] for cyclic input.
///
/// # Tie-breaking
///
/// The walk is greedy from the start state. At each step it takes the arc
/// with the smallest `(ilabel, olabel, nextstate)` among the arcs that still
/// lie on an optimal path, and it stops at a final state as soon as stopping
/// is optimal. Ties are settled one step at a time, so the label sequence
/// as a whole need not be the smallest among optimal paths.
/// Weights are compared with the relative tolerance of
/// [`TropicalWeight::approx_eq`].
///
/// Fails with [`EditError::NoPath`] if no final state is reachable.
pub fn shortest_path(fst: &Fst) -> Result<Fst> {
    let sorted;
    let fst = if fst.is_topologically_sorted() {
        fst
    } else {
        sorted = topological_order(fst)?;
        &sorted
    };

    let start = fst.start().ok_or(EditError::NoPath)?;
    let remaining = distance_to_final(fst);
    if remaining[start as usize].is_zero() {
        return Err(EditError::NoPath);
    }

    let mut path = Fst::new();
    let mut path_state = path.add_state();
    path.set_start(path_state);

    let mut state = start;
    loop {
        let here = remaining[state as usize];
        let final_weight = fst.final_weight(state);
        if !final_weight.is_zero() && final_weight.approx_eq(here) {
            path.set_final(path_state, final_weight);
            break;
        }

        let best = fst
            .arcs(state)
            .iter()
            .filter(|arc| {
                arc.weight
                    .times(remaining[arc.nextstate as usize])
                    .approx_eq(here)
            })
            .min_by_key(|arc| (arc.ilabel, arc.olabel, arc.nextstate))
            .ok_or(EditError::NoPath)?;

        let next = path.add_state();
        path.add_arc(path_state, Arc::new(best.ilabel, best.olabel, best.weight, next));
        path_state = next;
        state = best.nextstate;
    }

    Ok(path)
}

/// Arcs of a linear `path`, from the start state onwards.
pub(crate) fn path_arcs(path: &Fst) -> Vec<Arc> {
    let mut arcs = Vec::new();
    let mut state: Option<StateId> = path.start();
    while let Some(current) = state {
        state = path.arcs(current).first().map(|arc| {
            arcs.push(*arc);
            arc.nextstate
        });
    }
    arcs
}
