//! Minimal weighted finite-state transducer runtime.
//!
//! This module provides exactly the automaton algebra that edit distance
//! alignment needs, over the tropical semiring:
//!
//! - [`Fst`]: vector-backed mutable transducer
//! - [`compose`]: epsilon-aware composition of two transducers
//! - [`remove_epsilons`]: elimination of `ε:ε` arcs
//! - [`topological_order`]: renumbering of an acyclic transducer so that
//!   every arc goes forward
//! - [`shortest_distance`] / [`shortest_path`]: single-source shortest
//!   distances and one best path
//!
//! The [`Runtime`] trait bundles these operations behind a capability
//! interface so that the alignment pipeline can run on another weighted-FST
//! engine; [`NativeRuntime`] delegates to the functions of this module.
//!
//! No minimization or determinization is provided: composed edit automata
//! are acyclic and only ever searched for one shortest path.

mod compose;
mod epsilon;
mod runtime;
mod shortest;
mod topsort;
mod weight;

pub use compose::compose;
pub use epsilon::remove_epsilons;
pub use runtime::{NativeRuntime, Runtime};
pub use shortest::{shortest_distance, shortest_path};
pub(crate) use shortest::path_arcs;
pub use topsort::topological_order;
pub use weight::{TropicalWeight, WEIGHT_DELTA};

use smallvec::SmallVec;

use crate::symbol::{Label, EPSILON};

/// Index of a state within an [`Fst`].
pub type StateId = u32;

/// A weighted transition `ilabel:olabel / weight -> nextstate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    /// Input label
    pub ilabel: Label,
    /// Output label
    pub olabel: Label,
    /// Arc weight
    pub weight: TropicalWeight,
    /// Destination state
    pub nextstate: StateId,
}

impl Arc {
    /// Create an arc.
    #[inline]
    pub fn new(ilabel: Label, olabel: Label, weight: impl Into<TropicalWeight>, nextstate: StateId) -> Self {
        Self {
            ilabel,
            olabel,
            weight: weight.into(),
            nextstate,
        }
    }

    /// `true` for `ε:ε` arcs.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        self.ilabel == EPSILON && self.olabel == EPSILON
    }
}

/// Which label arcs are sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArcSortType {
    /// Sorted by `(ilabel, olabel)`
    Input,
    /// Sorted by `(olabel, ilabel)`
    Output,
}

#[derive(Clone, Debug)]
struct StateData {
    arcs: SmallVec<[Arc; 4]>,
    final_weight: TropicalWeight,
}

impl StateData {
    fn new() -> Self {
        Self {
            arcs: SmallVec::new(),
            final_weight: TropicalWeight::zero(),
        }
    }
}

/// A mutable weighted transducer over the tropical semiring.
///
/// States are numbered densely from `0`. A state is final iff its final
/// weight is not [`TropicalWeight::zero`]. An `Fst` without a start state
/// accepts nothing.
///
/// # Example
///
/// ```rust
/// use wfst_edit::fst::{Arc, Fst};
///
/// let mut fst = Fst::new();
/// let s0 = fst.add_state();
/// let s1 = fst.add_state();
/// fst.set_start(s0);
/// fst.add_arc(s0, Arc::new(4, 4, 0.0, s1));
/// fst.set_final(s1, 0.0);
///
/// assert_eq!(fst.num_states(), 2);
/// assert_eq!(fst.num_arcs(), 1);
/// assert!(fst.is_final(s1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Fst {
    states: Vec<StateData>,
    start: Option<StateId>,
    sorted: Option<ArcSortType>,
}

impl Fst {
    /// Create an empty transducer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a non-final state and return its id.
    pub fn add_state(&mut self) -> StateId {
        self.states.push(StateData::new());
        (self.states.len() - 1) as StateId
    }

    /// Designate the start state.
    pub fn set_start(&mut self, state: StateId) {
        debug_assert!((state as usize) < self.states.len());
        self.start = Some(state);
    }

    /// The start state, if any.
    #[inline]
    pub fn start(&self) -> Option<StateId> {
        self.start
    }

    /// Set the final weight of `state`.
    pub fn set_final(&mut self, state: StateId, weight: impl Into<TropicalWeight>) {
        self.states[state as usize].final_weight = weight.into();
    }

    /// Final weight of `state` (`zero` if not final).
    #[inline]
    pub fn final_weight(&self, state: StateId) -> TropicalWeight {
        self.states[state as usize].final_weight
    }

    /// `true` if `state` is final.
    #[inline]
    pub fn is_final(&self, state: StateId) -> bool {
        !self.final_weight(state).is_zero()
    }

    /// Append an arc leaving `state`.
    pub fn add_arc(&mut self, state: StateId, arc: Arc) {
        debug_assert!((arc.nextstate as usize) < self.states.len());
        self.states[state as usize].arcs.push(arc);
        self.sorted = None;
    }

    /// Arcs leaving `state`.
    #[inline]
    pub fn arcs(&self, state: StateId) -> &[Arc] {
        &self.states[state as usize].arcs
    }

    /// Number of states.
    #[inline]
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Total number of arcs.
    pub fn num_arcs(&self) -> usize {
        self.states.iter().map(|s| s.arcs.len()).sum()
    }

    /// Iterate all state ids.
    pub fn states(&self) -> impl DoubleEndedIterator<Item = StateId> + ExactSizeIterator {
        0..self.states.len() as StateId
    }

    /// Iterate all final states.
    pub fn final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states().filter(move |&s| self.is_final(s))
    }

    /// Sort the arcs of every state by input or output label.
    pub fn arc_sort(&mut self, sort_type: ArcSortType) {
        for state in &mut self.states {
            match sort_type {
                ArcSortType::Input => state
                    .arcs
                    .sort_by_key(|a| (a.ilabel, a.olabel, a.nextstate)),
                ArcSortType::Output => state
                    .arcs
                    .sort_by_key(|a| (a.olabel, a.ilabel, a.nextstate)),
            }
        }
        self.sorted = Some(sort_type);
    }

    /// Builder-style [`arc_sort`](Self::arc_sort).
    pub fn arc_sorted(mut self, sort_type: ArcSortType) -> Self {
        self.arc_sort(sort_type);
        self
    }

    /// The current arc order, if the arcs are known to be sorted.
    #[inline]
    pub fn sort_type(&self) -> Option<ArcSortType> {
        self.sorted
    }

    /// Arcs of `state` whose input label is `label`.
    ///
    /// Binary search when the arcs are input-sorted, linear scan otherwise.
    pub fn arcs_with_input(&self, state: StateId, label: Label) -> impl Iterator<Item = &Arc> + '_ {
        let arcs = self.arcs(state);
        let range = if self.sorted == Some(ArcSortType::Input) {
            let lo = arcs.partition_point(|a| a.ilabel < label);
            let hi = lo + arcs[lo..].partition_point(|a| a.ilabel == label);
            lo..hi
        } else {
            0..arcs.len()
        };
        arcs[range].iter().filter(move |a| a.ilabel == label)
    }

    /// `true` if every arc goes from a lower to a higher state id.
    pub fn is_topologically_sorted(&self) -> bool {
        self.states()
            .all(|s| self.arcs(s).iter().all(|a| a.nextstate > s))
    }

    /// `true` if any arc is `ε:ε`.
    pub fn has_epsilons(&self) -> bool {
        self.states
            .iter()
            .any(|s| s.arcs.iter().any(Arc::is_epsilon))
    }

    /// Find the first arc label not satisfying `is_valid`.
    pub fn find_invalid_label<F>(&self, is_valid: F) -> Option<Label>
    where
        F: Fn(Label) -> bool,
    {
        self.states.iter().flat_map(|s| s.arcs.iter()).find_map(|a| {
            if !is_valid(a.ilabel) {
                Some(a.ilabel)
            } else if !is_valid(a.olabel) {
                Some(a.olabel)
            } else {
                None
            }
        })
    }
}
