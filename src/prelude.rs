//! Convenience re-exports for common usage.
//!
//! ```
//! use list_diff::prelude::*;
//!
//! let old = ["A"];
//! let new = ["A", "B"];
//! let moves = diff(&old, &new, |item| Some(*item)).unwrap();
//! assert_eq!(moves.len(), 1);
//! ```

pub use crate::diff::{diff, diff_by_key};
pub use crate::error::{DiffError, DiffResult};
pub use crate::index::{KeyIndex, KeyedPartition, partition_by_key};
pub use crate::moves::{Move, apply};
