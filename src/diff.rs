//! Keyed list diff engine.
//!
//! Computes an ordered list of [`Move`]s (insert/remove) that transforms a
//! source sequence into a target sequence, matching elements by
//! caller-supplied identity keys so shared elements are reused rather than
//! destroyed and recreated.
//!
//! # Algorithm
//!
//! Three passes over the inputs:
//!
//! 1. **Projection** — rewrite the source so each slot holds its matching
//!    target item, an explicit `Absent` marker (key vanished from the
//!    target), or the next positionally-matched key-less target item.
//! 2. **Removal** — drop `Absent` slots left to right, emitting `Remove`
//!    moves whose indices reflect the working sequence as it shrinks.
//! 3. **Insertion & reorder** — walk the target against the surviving
//!    source elements; misplaced elements are detected with a one-slot
//!    lookahead and approximated as a remove/insert pair.
//!
//! The result is a greedy single-pass heuristic, not an LCS-minimal edit
//! script; see [`diff_by_key`] for the guarantees and the deliberate
//! quirks it preserves.
//!
//! # Complexity
//!
//! Time O(n + m) expected (hash lookups), space O(n + m).

use smallvec::SmallVec;

use crate::error::{DiffError, DiffResult};
use crate::index::partition_by_key;
use crate::moves::Move;

/// Inline capacity for the surviving-elements working list.
/// Typical child lists are short; longer ones spill to the heap.
const SIMULATE_INLINE: usize = 8;

// =============================================================================
// Internal Types
// =============================================================================

/// One slot of the projection: the source sequence rewritten in terms of
/// the target.
///
/// `Absent` is an explicit variant rather than `Option<&T>` so that the
/// marker can never collide with a legitimately matched item.
#[derive(Debug, Clone, Copy)]
enum Slot<'a, T> {
    /// The source item's key does not occur in the target
    Absent,
    /// The matching target item (by key, or positionally for key-less items)
    Item(&'a T),
}

// =============================================================================
// Public API
// =============================================================================

/// Diff two sequences of the same item type with one key function.
///
/// Convenience wrapper over [`diff_by_key`] using `key` on both sides.
///
/// ```
/// use list_diff::{diff, Move};
///
/// let old = ["A", "B", "C"];
/// let new = ["A", "C", "B"];
///
/// let moves = diff(&old, &new, |item| Some(*item)).unwrap();
/// assert_eq!(
///     moves,
///     vec![Move::Remove { index: 1 }, Move::Insert { index: 2, item: &"B" }],
/// );
/// ```
pub fn diff<'a, T, K>(old: &'a [T], new: &'a [T], key: K) -> DiffResult<Vec<Move<&'a T>>>
where
    K: Fn(&T) -> Option<&str>,
{
    diff_by_key(old, new, &key, &key)
}

/// Diff a source sequence against a target sequence of a different item
/// type, with independent key functions unified by the shared `&str` key
/// domain.
///
/// Returns moves borrowing items from `new`. Applied strictly in emitted
/// order to a working copy of `old` (see [`apply`](crate::moves::apply)),
/// the moves produce a sequence whose key sequence equals the target's —
/// except where the reorder lookahead fires, which is a heuristic
/// approximation and can leave a stale trailing element (covered by the
/// tests).
///
/// Quirks to be aware of:
///
/// - In the reorder branch the `Remove` index is taken from the *target*
///   cursor, not the surviving-elements cursor. The asymmetry is load-bearing
///   once earlier inserts have shifted positions.
/// - If a key occurs more than once in a sequence, only the last occurrence
///   is indexed; shadowed duplicates diff as if their key were missing.
/// - A lookahead that runs past the end of the surviving elements counts as
///   "no match" and falls through to an insert.
/// - A key-less target item that fails its positional match is inserted.
///
/// # Errors
///
/// [`DiffError::FreeCountMismatch`] if the target has fewer key-less items
/// than the source. No moves are emitted in that case.
pub fn diff_by_key<'a, T1, T2, K1, K2>(
    old: &'a [T1],
    new: &'a [T2],
    key_old: K1,
    key_new: K2,
) -> DiffResult<Vec<Move<&'a T2>>>
where
    K1: Fn(&T1) -> Option<&str>,
    K2: Fn(&T2) -> Option<&str>,
{
    // Quick path: nothing survives from an empty source, so every target
    // item is a plain append.
    if old.is_empty() {
        return Ok(new
            .iter()
            .enumerate()
            .map(|(index, item)| Move::Insert { index, item })
            .collect());
    }

    let old_part = partition_by_key(old, &key_old);
    let new_part = partition_by_key(new, &key_new);

    // Every key-less source item consumes one key-less target item, so a
    // target shortfall always fails. Checking up front lets the error carry
    // both counts.
    if old_part.free.len() > new_part.free.len() {
        return Err(DiffError::FreeCountMismatch {
            old_free: old_part.free.len(),
            new_free: new_part.free.len(),
        });
    }

    // Pass 1: project the source onto the target.
    let mut free_cursor = 0;
    let mut projection: Vec<Slot<'a, T2>> = Vec::with_capacity(old.len());
    for item in old {
        let slot = match key_old(item) {
            Some(k) => match new_part.key_index.get(k) {
                Some(&new_index) => Slot::Item(&new[new_index]),
                None => Slot::Absent,
            },
            None => {
                let free_item = new_part.free[free_cursor];
                free_cursor += 1;
                Slot::Item(free_item)
            }
        };
        projection.push(slot);
    }

    let mut moves = Vec::new();

    // Pass 2: drop vanished elements. Every slot left of the cursor has
    // already been retained, so the index of each removal equals the number
    // of survivors so far; indices stay valid against the shrinking list.
    let mut simulate: SmallVec<[&'a T2; SIMULATE_INLINE]> = SmallVec::new();
    for slot in projection {
        match slot {
            Slot::Item(item) => simulate.push(item),
            Slot::Absent => moves.push(Move::Remove { index: simulate.len() }),
        }
    }

    // Pass 3: align the survivors with the target. `i` walks the target,
    // `j` walks the survivors and advances only on a match or when a
    // misplaced element is consumed by the lookahead.
    let mut j = 0;
    for (i, item) in new.iter().enumerate() {
        let item_key = key_new(item);

        let Some(&sim_item) = simulate.get(j) else {
            // Ran past the survivors; the rest of the target is appended.
            moves.push(Move::Insert { index: i, item });
            continue;
        };

        if key_new(sim_item) == item_key {
            j += 1;
            continue;
        }

        let existed_in_old = item_key.is_some_and(|k| old_part.key_index.contains_key(k));
        if !existed_in_old {
            moves.push(Move::Insert { index: i, item });
        } else if simulate
            .get(j + 1)
            .is_some_and(|&next| key_new(next) == item_key)
        {
            // The survivor at `j` is misplaced: the wanted element sits right
            // behind it. Evict it and step over the match. The remove index
            // comes from the target cursor, not `j`.
            moves.push(Move::Remove { index: i });
            simulate.remove(j);
            j += 1;
        } else {
            moves.push(Move::Insert { index: i, item });
        }
    }

    Ok(moves)
}

// =============================================================================
// Tests
// =============================================================================
