//! Error types for list-diff.
//!
//! The diff itself is total except for one structural precondition (the
//! key-less item counts, see [`DiffError::FreeCountMismatch`]); everything
//! else surfaces only when replaying a move list.

use thiserror::Error;

/// Errors that can occur while diffing or applying a move list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The target sequence has fewer key-less items than the source.
    ///
    /// Every key-less source item is matched positionally against the next
    /// key-less target item, so the target must supply at least as many.
    /// There is no recovery path; the diff fails before emitting any moves.
    #[error("target sequence has {new_free} key-less items, source has {old_free}")]
    FreeCountMismatch {
        /// Key-less items in the source sequence
        old_free: usize,
        /// Key-less items in the target sequence
        new_free: usize,
    },

    /// A move's index does not fit the working sequence it is applied to.
    #[error("move index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds {
        /// Index carried by the offending move
        index: usize,
        /// Length of the working sequence at the time of application
        len: usize,
    },
}

/// Result type alias for list-diff operations.
pub type DiffResult<T> = Result<T, DiffError>;
