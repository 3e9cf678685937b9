//! Move edit operations.
//!
//! A diff is an ordered list of [`Move`]s. Order of application matters:
//! each `Remove` deletes the element currently at its index, each `Insert`
//! inserts at its index, and every index is relative to the working sequence
//! *after* all preceding moves have been applied.

use crate::error::{DiffError, DiffResult};

/// A single edit operation in a diff.
///
/// `T` is the move payload; [`diff`](crate::diff::diff) returns moves borrowing
/// from the target sequence (`Move<&T2>`), so diffing never clones items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move<T> {
    /// Remove the element currently at `index` from the working sequence.
    Remove { index: usize },
    /// Insert `item` at `index` in the working sequence.
    Insert { index: usize, item: T },
}

impl<T> Move<T> {
    /// Check if this is a Remove operation
    pub fn is_remove(&self) -> bool {
        matches!(self, Move::Remove { .. })
    }

    /// Check if this is an Insert operation
    pub fn is_insert(&self) -> bool {
        matches!(self, Move::Insert { .. })
    }

    /// Index this move applies at, in the working sequence's index space.
    pub fn index(&self) -> usize {
        match self {
            Move::Remove { index } | Move::Insert { index, .. } => *index,
        }
    }
}

/// Apply a move list, in order, to a working copy seeded from `source`.
///
/// This is the executable form of the diff contract: for keyed sequences
/// without duplicate keys, `apply(old, &diff(old, new, key)?)` yields a
/// sequence whose key projection equals `new`'s.
///
/// # Errors
///
/// Returns [`DiffError::IndexOutOfBounds`] if a move's index does not fit
/// the working sequence at the time it is applied. A well-formed move list
/// produced by [`diff`](crate::diff::diff) against the same `source` never fails.
pub fn apply<T: Clone>(source: &[T], moves: &[Move<&T>]) -> DiffResult<Vec<T>> {
    let mut working: Vec<T> = source.to_vec();

    for mv in moves {
        match *mv {
            Move::Remove { index } => {
                if index >= working.len() {
                    return Err(DiffError::IndexOutOfBounds { index, len: working.len() });
                }
                working.remove(index);
            }
            Move::Insert { index, item } => {
                if index > working.len() {
                    return Err(DiffError::IndexOutOfBounds { index, len: working.len() });
                }
                working.insert(index, (*item).clone());
            }
        }
    }

    Ok(working)
}
