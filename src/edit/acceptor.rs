//! Linear acceptors for token sequences.

use crate::error::Result;
use crate::fst::{Arc, Fst};
use crate::symbol::{SymbolTable, Token};

/// Build the linear acceptor of `sequence`.
///
/// State `i` moves to state `i + 1` on `id:id / 0`, where `id` is the symbol
/// id of the `i`-th token; the last state is final with weight `0`. An empty
/// sequence yields a single start state that is final.
///
/// Fails with [`EditError::UnknownToken`](crate::error::EditError::UnknownToken)
/// if a token has no id in `table`.
///
/// # Example
///
/// ```rust
/// use wfst_edit::edit::build_acceptor;
/// use wfst_edit::symbol::SymbolTable;
///
/// let table = SymbolTable::build("abc".chars()).unwrap();
/// let acceptor = build_acceptor(&['c', 'a'], &table).unwrap();
/// assert_eq!(acceptor.num_states(), 3);
/// assert_eq!(acceptor.arcs(0)[0].ilabel, table.id(&'c').unwrap());
/// ```
pub fn build_acceptor<T: Token>(sequence: &[T], table: &SymbolTable<T>) -> Result<Fst> {
    let mut fst = Fst::new();
    let mut state = fst.add_state();
    fst.set_start(state);
    for token in sequence {
        let id = table.require_id(token)?;
        let next = fst.add_state();
        fst.add_arc(state, Arc::new(id, id, 0.0, next));
        state = next;
    }
    fst.set_final(state, 0.0);
    Ok(fst)
}
