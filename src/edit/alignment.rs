//! Minimum-cost alignment extraction.

use std::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::error::{EditError, Result};
use crate::fst::{Fst, Runtime, TropicalWeight};
use crate::symbol::{Label, Symbol, SymbolTable, Token};

/// What an alignment step does to the source sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum EditOperation {
    /// Source token kept unchanged.
    Copy,
    /// Source token replaced by a different target token.
    Substitute,
    /// Target token inserted.
    Insert,
    /// Source token deleted.
    Delete,
}

impl EditOperation {
    fn classify<T: PartialEq>(input: &Symbol<T>, output: &Symbol<T>) -> Self {
        match (input, output) {
            (Symbol::Epsilon, _) => EditOperation::Insert,
            (_, Symbol::Epsilon) => EditOperation::Delete,
            (a, b) if a == b => EditOperation::Copy,
            _ => EditOperation::Substitute,
        }
    }
}

/// One step of an alignment: `input -> output` at `weight`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct AlignmentStep<T> {
    /// Source symbol, `Epsilon` for insertions
    pub input: Symbol<T>,
    /// Target symbol, `Epsilon` for deletions
    pub output: Symbol<T>,
    /// Cost of the step
    pub weight: f64,
    /// Operation performed
    pub operation: EditOperation,
}

/// A minimum-cost alignment and its total edit distance.
///
/// The text rendering lists every step followed by the total:
///
/// ```text
/// Transition :
/// k	->	s,	cost : 1.000
/// i	->	i,	cost : 0.000
/// Total Edit Distance : 1.000
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Alignment<T> {
    steps: Vec<AlignmentStep<T>>,
    total: f64,
}

impl<T> Alignment<T> {
    /// Total edit distance.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Steps of the alignment, in sequence order.
    #[inline]
    pub fn steps(&self) -> &[AlignmentStep<T>] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if the alignment has no step (both sequences empty).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps performing `operation`.
    pub fn count(&self, operation: EditOperation) -> usize {
        self.steps
            .iter()
            .filter(|step| step.operation == operation)
            .count()
    }

    /// `true` if every step is a copy.
    pub fn is_identity(&self) -> bool {
        self.steps
            .iter()
            .all(|step| step.operation == EditOperation::Copy)
    }

    /// Consume the alignment, returning its steps.
    pub fn into_steps(self) -> Vec<AlignmentStep<T>> {
        self.steps
    }
}

impl<T: fmt::Display> fmt::Display for Alignment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transition :")?;
        for step in &self.steps {
            writeln!(
                f,
                "{}\t->\t{},\tcost : {:.3}",
                step.input, step.output, step.weight
            )?;
        }
        write!(f, "Total Edit Distance : {:.3}", self.total)
    }
}

/// Extract the minimum-cost alignment from an edit lattice.
///
/// The total is the shortest distance to a final state (including its final
/// weight); the steps are the arcs of one shortest path, chosen with the
/// tie-break of [`shortest_path`](crate::fst::shortest_path).
///
/// # Errors
///
/// - [`EditError::NoPath`] if no final state is reachable.
/// - [`EditError::InvalidLabel`] if an arc label is not a symbol of `table`.
pub fn extract<T, R>(runtime: &R, lattice: &Fst, table: &SymbolTable<T>) -> Result<Alignment<T>>
where
    T: Token,
    R: Runtime + ?Sized,
{
    let distances = runtime.shortest_distance(lattice);
    let total = lattice
        .final_states()
        .map(|state| distances[state as usize].times(lattice.final_weight(state)))
        .fold(TropicalWeight::zero(), TropicalWeight::plus);
    if total.is_zero() {
        return Err(EditError::NoPath);
    }

    let path = runtime.shortest_path(lattice)?;
    let decode = |label: Label| table.symbol(label).ok_or(EditError::InvalidLabel(label));

    let steps = crate::fst::path_arcs(&path)
        .into_iter()
        .map(|arc| {
            let input = decode(arc.ilabel)?;
            let output = decode(arc.olabel)?;
            let operation = EditOperation::classify(&input, &output);
            Ok(AlignmentStep {
                input,
                output,
                weight: arc.weight.value(),
                operation,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("alignment of {} step(s), total {:.3}", steps.len(), total);
    Ok(Alignment {
        steps,
        total: total.value(),
    })
}
