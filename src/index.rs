//! Key/Free Indexer
//!
//! Partitions a sequence into keyed items (indexed by key → last position)
//! and key-less "free" items (kept in original relative order for positional
//! matching). This is the leaf pass both sides of the diff run first.

use rustc_hash::FxHashMap;

/// Mapping from key to the **last** index at which that key occurs.
///
/// If a key appears more than once, earlier occurrences are shadowed. This
/// is a documented quirk of the algorithm, not a uniqueness guarantee.
pub type KeyIndex<'a> = FxHashMap<&'a str, usize>;

/// Result of partitioning one sequence by key.
#[derive(Debug, Default)]
pub struct KeyedPartition<'a, T> {
    /// Key → last occurring position of that key
    pub key_index: KeyIndex<'a>,
    /// Key-less items, in original relative order
    pub free: Vec<&'a T>,
}

/// Partition `items` into a [`KeyIndex`] and a free list.
///
/// For each item in order: a `Some(key)` records (or overwrites) the key's
/// position; a `None` appends the item to the free list. Pure and
/// infallible.
pub fn partition_by_key<'a, T, K>(items: &'a [T], key: K) -> KeyedPartition<'a, T>
where
    K: Fn(&T) -> Option<&str>,
{
    let mut partition = KeyedPartition {
        key_index: KeyIndex::default(),
        free: Vec::new(),
    };

    for (index, item) in items.iter().enumerate() {
        match key(item) {
            Some(k) => {
                partition.key_index.insert(k, index);
            }
            None => partition.free.push(item),
        }
    }

    partition
}
