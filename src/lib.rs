//! list-diff - Keyed insert/remove edit scripts for ordered sequences
//!
//! Computes the sequence of [`Move`]s (insert/remove) that transforms a
//! source sequence into a target sequence. Elements are matched by
//! caller-supplied identity keys rather than value equality, so elements
//! present in both sequences are reused instead of destroyed and recreated.
//! Key-less elements are matched purely by position among their peers.
//!
//! The algorithm is a greedy single-pass heuristic with one-slot lookahead
//! for reorder detection. It is deliberately not LCS-optimal and has no
//! dedicated move operation; reordering becomes a remove/insert pair.
//!
//! ## Modules
//! - `diff`: the three-pass diff engine
//! - `index`: key/free partitioning of one sequence
//! - `moves`: the `Move` edit op and the `apply` replay helper
//! - `error`: error types
//!
//! ## Usage
//!
//! ```
//! use list_diff::{diff, apply, Move};
//!
//! let old = ["A", "B", "C"];
//! let new = ["A", "C", "B"];
//!
//! let moves = diff(&old, &new, |item| Some(*item)).unwrap();
//! assert_eq!(
//!     moves,
//!     vec![Move::Remove { index: 1 }, Move::Insert { index: 2, item: &"B" }],
//! );
//!
//! // Moves apply in order to a working copy of the source.
//! assert_eq!(apply(&old, &moves).unwrap(), new);
//! ```
//!
//! Sequences of different item types diff through
//! [`diff_by_key`] with one key function per side, e.g. a model list
//! against a view list sharing the same string keys.

// =============================================================================
// Modules
// =============================================================================

/// Diff engine: projection, removal, insertion/reorder passes
pub mod diff;

/// Key/free partitioning of a single sequence
pub mod index;

/// Move edit operations and move-list application
pub mod moves;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

pub use diff::{diff, diff_by_key};

pub use index::{KeyIndex, KeyedPartition, partition_by_key};

pub use moves::{Move, apply};

pub use error::{DiffError, DiffResult};

// =============================================================================
// Tests
// =============================================================================
