//! Symbol alphabets shared by every automaton of an alignment run.
//!
//! Every arc label in this crate is a dense [`Label`] id. The first four ids
//! are reserved for control symbols used as the intermediate alphabet between
//! the left and right edit factors:
//!
//! | id | symbol         | text form |
//! |----|----------------|-----------|
//! | 0  | [`EPSILON`]    | `<eps>`   |
//! | 1  | [`DELETE`]     | `<del>`   |
//! | 2  | [`INSERT`]     | `<ins>`   |
//! | 3  | [`SUBSTITUTE`] | `<sub>`   |
//!
//! Tokens of the two input sequences receive ids from [`FIRST_TOKEN_ID`]
//! onwards through a [`SymbolTable`].

mod artifact;
mod number;
mod table;

pub use number::Number;
pub use table::SymbolTable;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Dense symbol id used as an arc label.
pub type Label = u32;

/// The empty symbol: consumes or emits nothing.
pub const EPSILON: Label = 0;

/// Operation label emitted by the left factor when a source token is deleted.
pub const DELETE: Label = 1;

/// Operation label emitted by the left factor when a target token is inserted.
pub const INSERT: Label = 2;

/// Operation label for a generic (flat penalty) substitution.
pub const SUBSTITUTE: Label = 3;

/// First id handed out to a sequence token.
pub const FIRST_TOKEN_ID: Label = 4;

/// Reserved control symbols in artifact order.
pub const RESERVED_SYMBOLS: [(&str, Label); 4] = [
    ("<eps>", EPSILON),
    ("<del>", DELETE),
    ("<ins>", INSERT),
    ("<sub>", SUBSTITUTE),
];

/// A sequence element that can be placed in a [`SymbolTable`].
///
/// Tokens need a total order so that id assignment is deterministic, and a
/// textual form (`Display` + `FromStr`) so that a table can be persisted as
/// a `token<TAB>id` artifact and read back.
///
/// Implemented for `char` (letter sequences) and [`Number`] (numeric
/// sequences).
pub trait Token: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr {}

impl Token for char {}

impl Token for Number {}

/// A decoded arc label: either a reserved control symbol or a token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum Symbol<T> {
    /// `<eps>`
    Epsilon,
    /// `<del>`
    Delete,
    /// `<ins>`
    Insert,
    /// `<sub>`
    Substitute,
    /// A sequence token
    Token(T),
}

impl<T> Symbol<T> {
    /// Decode a reserved label, or `None` for token ids.
    pub fn reserved(label: Label) -> Option<Self> {
        match label {
            EPSILON => Some(Symbol::Epsilon),
            DELETE => Some(Symbol::Delete),
            INSERT => Some(Symbol::Insert),
            SUBSTITUTE => Some(Symbol::Substitute),
            _ => None,
        }
    }

    /// Returns the token if this symbol is one.
    pub fn as_token(&self) -> Option<&T> {
        match self {
            Symbol::Token(token) => Some(token),
            _ => None,
        }
    }

    /// `true` for [`Symbol::Epsilon`].
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl<T: fmt::Display> fmt::Display for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Epsilon => f.write_str("<eps>"),
            Symbol::Delete => f.write_str("<del>"),
            Symbol::Insert => f.write_str("<ins>"),
            Symbol::Substitute => f.write_str("<sub>"),
            Symbol::Token(token) => write!(f, "{}", token),
        }
    }
}
