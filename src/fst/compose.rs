//! Weighted transducer composition.

use std::borrow::Cow;
use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use super::{Arc, ArcSortType, Fst, StateId};
use crate::symbol::EPSILON;

/// Compose `a` with `b`.
///
/// The result maps `x` to `z` with weight `w1 ⊗ w2` whenever `a` maps `x` to
/// some `y` with weight `w1` and `b` maps `y` to `z` with weight `w2`.
/// States of the result are the pairs `(qa, qb)` reachable from
/// `(start(a), start(b))`, numbered in breadth-first discovery order.
///
/// Epsilons are handled without a composition filter:
///
/// - an arc of `a` with output `ε` advances `a` alone;
/// - an arc of `b` with input `ε` advances `b` alone;
/// - `ε` never matches `ε`.
///
/// When both kinds of move are possible from the same pair, some alignments
/// are produced twice with equal weight. That is harmless under the tropical
/// semiring, where parallel paths combine by minimum.
///
/// Arcs of `b` are looked up by binary search; `b` is input-sorted on the fly
/// if it is not already.
pub fn compose(a: &Fst, b: &Fst) -> Fst {
    let mut result = Fst::new();
    let (Some(start_a), Some(start_b)) = (a.start(), b.start()) else {
        return result;
    };

    let b: Cow<'_, Fst> = if b.sort_type() == Some(ArcSortType::Input) {
        Cow::Borrowed(b)
    } else {
        Cow::Owned(b.clone().arc_sorted(ArcSortType::Input))
    };

    let mut pairs: FxHashMap<(StateId, StateId), StateId> = FxHashMap::default();
    let mut queue: VecDeque<(StateId, StateId)> = VecDeque::new();

    let start = result.add_state();
    result.set_start(start);
    pairs.insert((start_a, start_b), start);
    queue.push_back((start_a, start_b));

    let mut pending: Vec<(StateId, StateId, Arc)> = Vec::new();

    while let Some((qa, qb)) = queue.pop_front() {
        let state = pairs[&(qa, qb)];

        let final_weight = a.final_weight(qa).times(b.final_weight(qb));
        if !final_weight.is_zero() {
            result.set_final(state, final_weight);
        }

        pending.clear();
        for arc_a in a.arcs(qa) {
            if arc_a.olabel == EPSILON {
                pending.push((
                    arc_a.nextstate,
                    qb,
                    Arc::new(arc_a.ilabel, EPSILON, arc_a.weight, 0),
                ));
                continue;
            }
            for arc_b in b.arcs_with_input(qb, arc_a.olabel) {
                pending.push((
                    arc_a.nextstate,
                    arc_b.nextstate,
                    Arc::new(arc_a.ilabel, arc_b.olabel, arc_a.weight.times(arc_b.weight), 0),
                ));
            }
        }
        for arc_b in b.arcs_with_input(qb, EPSILON) {
            pending.push((
                qa,
                arc_b.nextstate,
                Arc::new(EPSILON, arc_b.olabel, arc_b.weight, 0),
            ));
        }

        for (na, nb, mut arc) in pending.drain(..) {
            arc.nextstate = *pairs.entry((na, nb)).or_insert_with(|| {
                queue.push_back((na, nb));
                result.add_state()
            });
            result.add_arc(state, arc);
        }
    }

    log::trace!(
        "composed {}x{} states into {} states, {} arcs",
        a.num_states(),
        b.num_states(),
        result.num_states(),
        result.num_arcs()
    );
    result
}
