//! Bidirectional token ↔ id mapping.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use super::{Label, Symbol, Token, FIRST_TOKEN_ID};
use crate::error::{EditError, Result};

/// Mapping between sequence tokens and dense symbol ids.
///
/// Ids `0..4` are the reserved control symbols; tokens occupy the contiguous
/// range starting at [`FIRST_TOKEN_ID`]. A table is built once per alignment
/// run and is read-only afterwards.
///
/// # Example
///
/// ```rust
/// use wfst_edit::symbol::{SymbolTable, Symbol, FIRST_TOKEN_ID};
///
/// let table = SymbolTable::build("kitten".chars().chain("sitting".chars())).unwrap();
/// assert_eq!(table.num_tokens(), 7); // e g i k n s t
/// assert_eq!(table.id(&'e'), Some(FIRST_TOKEN_ID));
/// assert_eq!(table.symbol(FIRST_TOKEN_ID), Some(Symbol::Token('e')));
/// assert_eq!(table.id(&'z'), None);
/// ```
#[derive(Clone, Debug)]
pub struct SymbolTable<T: Token> {
    ids: FxHashMap<T, Label>,
    tokens: Vec<T>,
}

impl<T: Token> SymbolTable<T> {
    /// Create a table holding only the reserved symbols.
    pub fn new() -> Self {
        Self {
            ids: FxHashMap::default(),
            tokens: Vec::new(),
        }
    }

    /// Build a table from the distinct tokens of `tokens`.
    ///
    /// Ids are assigned in ascending token order so that the same token set
    /// always yields the same table. Tokens that never occur in `tokens` are
    /// never assigned an id.
    pub fn build<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let distinct: BTreeSet<T> = tokens.into_iter().collect();
        let mut table = Self::new();
        for token in distinct {
            table.push(token)?;
        }
        log::trace!("built symbol table with {} token(s)", table.num_tokens());
        Ok(table)
    }

    /// Append `token` with the next free id.
    ///
    /// Fails with [`EditError::DuplicateToken`] if the token already has an id.
    pub(crate) fn push(&mut self, token: T) -> Result<Label> {
        let id = self.next_id();
        if let Some(&first) = self.ids.get(&token) {
            return Err(EditError::DuplicateToken {
                token: token.to_string(),
                first,
                second: id,
            });
        }
        self.ids.insert(token.clone(), id);
        self.tokens.push(token);
        Ok(id)
    }

    fn next_id(&self) -> Label {
        FIRST_TOKEN_ID + self.tokens.len() as Label
    }

    /// Id of `token`, if present.
    #[inline]
    pub fn id(&self, token: &T) -> Option<Label> {
        self.ids.get(token).copied()
    }

    /// Id of `token`, failing with [`EditError::UnknownToken`] if absent.
    pub fn require_id(&self, token: &T) -> Result<Label> {
        self.id(token)
            .ok_or_else(|| EditError::UnknownToken(token.to_string()))
    }

    /// Token carried by a non-reserved `label`.
    #[inline]
    pub fn token(&self, label: Label) -> Option<&T> {
        label
            .checked_sub(FIRST_TOKEN_ID)
            .and_then(|index| self.tokens.get(index as usize))
    }

    /// Decode any label of this table.
    pub fn symbol(&self, label: Label) -> Option<Symbol<T>> {
        Symbol::reserved(label).or_else(|| self.token(label).cloned().map(Symbol::Token))
    }

    /// `true` if `label` is a reserved symbol or a token id of this table.
    #[inline]
    pub fn contains_label(&self, label: Label) -> bool {
        label < self.next_id()
    }

    /// Number of token entries (reserved symbols excluded).
    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Number of symbols including the four reserved ones.
    pub fn num_symbols(&self) -> usize {
        FIRST_TOKEN_ID as usize + self.tokens.len()
    }

    /// `true` if the table holds no token (only reserved symbols).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &T)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, token)| (FIRST_TOKEN_ID + index as Label, token))
    }

    /// Check that every token of `tokens` has an id.
    pub fn ensure_covers<'a, I>(&self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        for token in tokens {
            self.require_id(token)?;
        }
        Ok(())
    }
}

impl<T: Token> Default for SymbolTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
