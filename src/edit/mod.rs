//! Weighted edit distance by transducer composition.
//!
//! An alignment run goes through four stages:
//!
//! 1. **Alphabet**: a [`SymbolTable`] covering both sequences.
//! 2. **Costs**: the cost model is evaluated once into a
//!    [`CostMatrix`] restricted to target tokens.
//! 3. **Lattice**: [`build_lattice`] composes the source acceptor, the
//!    [left](left_factor) and [right](right_factor) edit factors and the
//!    target acceptor into an acyclic edit lattice.
//! 4. **Extraction**: [`extract`] reads the total distance and one
//!    minimum-cost path back as an [`Alignment`].
//!
//! [`Aligner`] runs the whole pipeline with a fixed cost model and fixed
//! penalties; the free functions [`keyboard_distance`], [`letter_distance`]
//! and [`numeric_distance`] cover the common configurations.
//!
//! # Example
//!
//! ```rust
//! use wfst_edit::edit::{letter_distance, EditOperation};
//!
//! let alignment = letter_distance("kitten", "sitting").unwrap();
//! assert_eq!(alignment.total(), 3.0);
//! assert_eq!(alignment.count(EditOperation::Insert), 1);
//! ```

mod acceptor;
mod alignment;
mod factor;
mod pipeline;

pub use acceptor::build_acceptor;
pub use alignment::{extract, Alignment, AlignmentStep, EditOperation};
pub use factor::{left_factor, right_factor, Penalties};
pub use pipeline::build_lattice;

use std::collections::BTreeSet;

use crate::cost::{CostMatrix, CostModel, FlatCost, KeyboardLayout, NumericThreshold};
use crate::error::Result;
use crate::fst::{NativeRuntime, Runtime};
use crate::symbol::{Number, SymbolTable, Token};

/// Computes minimum-cost alignments with a fixed cost model and penalties.
///
/// Built with [`AlignerBuilder`]. An aligner holds no per-run state, so one
/// instance can serve any number of alignments, from any number of threads
/// if its cost model and runtime are `Sync`.
///
/// # Example
///
/// ```rust
/// use wfst_edit::prelude::*;
///
/// let aligner = AlignerBuilder::new()
///     .cost_model(NumericThreshold::new(1.5).unwrap())
///     .build()
///     .unwrap();
///
/// let source = [1.0, 2.0, 3.0].map(|v| Number::new(v).unwrap());
/// let target = [1.0, 2.0, 4.0].map(|v| Number::new(v).unwrap());
/// let alignment = aligner.align(&source, &target).unwrap();
/// assert_eq!(alignment.total(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Aligner<C, R = NativeRuntime> {
    penalties: Penalties,
    cost_model: C,
    runtime: R,
}

impl<C, R: Runtime> Aligner<C, R> {
    /// Align `source` to `target` with a symbol table built from both.
    pub fn align<T>(&self, source: &[T], target: &[T]) -> Result<Alignment<T>>
    where
        T: Token,
        C: CostModel<T>,
    {
        let table = SymbolTable::build(source.iter().chain(target).cloned())?;
        self.align_with_table(source, target, &table)
    }

    /// Align `source` to `target` using an existing symbol table.
    ///
    /// The table may hold more tokens than the two sequences; it must hold
    /// at least theirs, otherwise this fails with
    /// [`EditError::UnknownToken`](crate::error::EditError::UnknownToken).
    pub fn align_with_table<T>(
        &self,
        source: &[T],
        target: &[T],
        table: &SymbolTable<T>,
    ) -> Result<Alignment<T>>
    where
        T: Token,
        C: CostModel<T>,
    {
        table.ensure_covers(source.iter().chain(target))?;

        let sources: BTreeSet<&T> = source.iter().collect();
        let targets: BTreeSet<&T> = target.iter().collect();
        let matrix = CostMatrix::build(
            &self.cost_model,
            sources.iter().copied(),
            targets.iter().copied(),
        );
        log::debug!(
            "aligning {} to {} token(s), {} soft substitution(s)",
            source.len(),
            target.len(),
            matrix.len()
        );

        let lattice = build_lattice(
            &self.runtime,
            table,
            source,
            target,
            &matrix,
            &self.penalties,
        )?;
        extract(&self.runtime, &lattice, table)
    }

    /// Total edit distance only.
    pub fn distance<T>(&self, source: &[T], target: &[T]) -> Result<f64>
    where
        T: Token,
        C: CostModel<T>,
    {
        self.align(source, target).map(|alignment| alignment.total())
    }

    /// Edit penalties in use.
    pub fn penalties(&self) -> &Penalties {
        &self.penalties
    }

    /// Cost model in use.
    pub fn cost_model(&self) -> &C {
        &self.cost_model
    }

    /// Runtime in use.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }
}

/// Builder for [`Aligner`].
///
/// Defaults: [`FlatCost`], [`NativeRuntime`], all penalties `1.0`.
/// Penalties are validated by [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct AlignerBuilder<C = FlatCost, R = NativeRuntime> {
    miss: f64,
    insertion: f64,
    deletion: f64,
    cost_model: C,
    runtime: R,
}

impl AlignerBuilder {
    /// Create a builder with the defaults.
    pub fn new() -> Self {
        let penalties = Penalties::default();
        AlignerBuilder {
            miss: penalties.miss(),
            insertion: penalties.insertion(),
            deletion: penalties.deletion(),
            cost_model: FlatCost,
            runtime: NativeRuntime,
        }
    }
}

impl Default for AlignerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> AlignerBuilder<C, R> {
    /// Set all three penalties at once.
    pub fn penalties(mut self, penalties: Penalties) -> Self {
        self.miss = penalties.miss();
        self.insertion = penalties.insertion();
        self.deletion = penalties.deletion();
        self
    }

    /// Penalty of a substitution without a soft weight.
    pub fn miss_penalty(mut self, miss: f64) -> Self {
        self.miss = miss;
        self
    }

    /// Penalty of an insertion.
    pub fn insertion_penalty(mut self, insertion: f64) -> Self {
        self.insertion = insertion;
        self
    }

    /// Penalty of a deletion.
    pub fn deletion_penalty(mut self, deletion: f64) -> Self {
        self.deletion = deletion;
        self
    }

    /// Replace the cost model.
    pub fn cost_model<C2>(self, cost_model: C2) -> AlignerBuilder<C2, R> {
        AlignerBuilder {
            miss: self.miss,
            insertion: self.insertion,
            deletion: self.deletion,
            cost_model,
            runtime: self.runtime,
        }
    }

    /// Replace the automaton runtime.
    pub fn runtime<R2: Runtime>(self, runtime: R2) -> AlignerBuilder<C, R2> {
        AlignerBuilder {
            miss: self.miss,
            insertion: self.insertion,
            deletion: self.deletion,
            cost_model: self.cost_model,
            runtime,
        }
    }

    /// Build the [`Aligner`].
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidPenalty`](crate::error::EditError::InvalidPenalty)
    /// if a penalty is negative or not finite.
    pub fn build(self) -> Result<Aligner<C, R>> {
        Ok(Aligner {
            penalties: Penalties::new(self.miss, self.insertion, self.deletion)?,
            cost_model: self.cost_model,
            runtime: self.runtime,
        })
    }
}

/// Letter alignment with keyboard-proximity soft substitutions and unit
/// penalties.
///
/// ```rust
/// use wfst_edit::edit::keyboard_distance;
///
/// // 'q' and 'w' are neighbours: 1 / (2 * 1.9)
/// let alignment = keyboard_distance("q", "w", 1.9).unwrap();
/// assert!((alignment.total() - 0.263).abs() < 1e-3);
/// ```
pub fn keyboard_distance(source: &str, target: &str, threshold: f64) -> Result<Alignment<char>> {
    let aligner = AlignerBuilder::new()
        .cost_model(KeyboardLayout::qwerty(threshold)?)
        .build()?;
    aligner.align(&chars(source), &chars(target))
}

/// Letter alignment with unit penalties and no soft substitutions.
pub fn letter_distance(source: &str, target: &str) -> Result<Alignment<char>> {
    AlignerBuilder::new()
        .build()?
        .align(&chars(source), &chars(target))
}

/// Numeric alignment with soft substitutions at `|a - b|` below `threshold`.
///
/// Fails with [`EditError::InvalidNumber`](crate::error::EditError::InvalidNumber)
/// for NaN or infinite values.
pub fn numeric_distance(source: &[f64], target: &[f64], threshold: f64) -> Result<Alignment<Number>> {
    let aligner = AlignerBuilder::new()
        .cost_model(NumericThreshold::new(threshold)?)
        .build()?;
    aligner.align(&numbers(source)?, &numbers(target)?)
}

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Convert raw values into numeric tokens.
pub fn numbers(values: &[f64]) -> Result<Vec<Number>> {
    values.iter().map(|&value| Number::new(value)).collect()
}
