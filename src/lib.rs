//! # wfst-edit
//!
//! Weighted edit distance between sequences, computed by composing weighted
//! finite-state transducers over the tropical semiring.
//!
//! Substitutions can be *soft*: a [cost model](cost::CostModel) decides how
//! close two tokens are (adjacent keys on a keyboard, nearby numbers), and a
//! close pair substitutes for less than the flat miss penalty. The result is
//! the total distance together with one minimum-cost alignment, the sequence
//! of copy, substitute, insert and delete steps that achieves it.
//!
//! The pipeline, from leaves to result:
//!
//! - [`symbol`]: token ↔ id alphabet with reserved control symbols
//! - [`cost`]: soft substitution cost models and the per-run cost matrix
//! - [`fst`]: minimal weighted transducer runtime
//! - [`edit`]: acceptors, edit factors, composition and alignment extraction
//!
//! ## Example
//!
//! ```rust
//! use wfst_edit::prelude::*;
//!
//! let alignment = keyboard_distance("helo", "hwlo", DEFAULT_KEYBOARD_THRESHOLD).unwrap();
//! // 'e' and 'w' are adjacent keys, so the substitution is cheaper than a miss
//! assert!(alignment.total() < 1.0);
//! assert_eq!(alignment.count(EditOperation::Substitute), 1);
//! println!("{}", alignment);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cost;
pub mod edit;
pub mod error;
pub mod fst;
pub mod symbol;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cost::{
        CostMatrix, CostModel, FlatCost, KeyboardLayout, NumericThreshold,
        DEFAULT_KEYBOARD_THRESHOLD, DEFAULT_NUMERIC_THRESHOLD,
    };
    pub use crate::edit::{
        keyboard_distance, letter_distance, numeric_distance, Aligner, AlignerBuilder,
        Alignment, AlignmentStep, EditOperation, Penalties,
    };
    pub use crate::error::{EditError, Result};
    pub use crate::fst::{Fst, NativeRuntime, Runtime, TropicalWeight};
    pub use crate::symbol::{Number, Symbol, SymbolTable, Token};
}
