//! Separate-chaining hash index
//!
//! Bucket count is fixed at construction. Each bucket owns its entries, so
//! lookups hand out borrows scoped to the call and removal returns the value
//! by move; there is no way to leak or double-free a node.

use std::hash::{BuildHasher, Hash};
use std::mem;

use crate::hash::PolyState;

/// Keyed index mapping `K` to `V` with expected O(1) insert/lookup/remove.
///
/// Collisions are resolved by chaining inside the bucket; callers never see
/// which bucket a key lands in.
pub struct HashIndex<K, V, S = PolyState> {
    bins: Vec<Vec<(K, V)>>,
    len: usize,
    state: S,
}

impl<K, V> HashIndex<K, V, PolyState>
where
    K: Hash + Eq,
{
    /// Create an index with the given number of buckets.
    ///
    /// # Panics
    /// Panics if `buckets` is zero.
    pub fn new(buckets: usize) -> Self {
        Self::with_hasher(buckets, PolyState)
    }
}

impl<K, V, S> HashIndex<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Create an index with the given bucket count and hasher.
    ///
    /// # Panics
    /// Panics if `buckets` is zero.
    pub fn with_hasher(buckets: usize, state: S) -> Self {
        assert!(buckets > 0, "bucket count must be greater than 0");

        let mut bins = Vec::with_capacity(buckets);
        bins.resize_with(buckets, Vec::new);

        Self { bins, len: 0, state }
    }

    fn slot(&self, key: &K) -> usize {
        (self.state.hash_one(key) % self.bins.len() as u64) as usize
    }

    /// Insert or overwrite; returns the displaced value if the key was present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let slot = self.slot(&key);
        let bin = &mut self.bins[slot];

        for (existing, stored) in bin.iter_mut() {
            if *existing == key {
                return Some(mem::replace(stored, value));
            }
        }

        bin.push((key, value));
        self.len += 1;
        None
    }

    /// Borrow the value stored under `key`, or `None` if absent.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.bins[self.slot(key)]
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Mutably borrow the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = self.slot(key);
        self.bins[slot]
            .iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Remove the entry under `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.slot(key);
        let bin = &mut self.bins[slot];

        let pos = bin.iter().position(|(existing, _)| existing == key)?;
        self.len -= 1;
        Some(bin.swap_remove(pos).1)
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets (fixed at construction).
    pub fn bucket_count(&self) -> usize {
        self.bins.len()
    }

    /// Drop all entries, keeping the bucket array.
    pub fn clear(&mut self) {
        for bin in &mut self.bins {
            bin.clear();
        }
        self.len = 0;
    }
}
