//! MemoCache: LRU lookup cache in front of a slow value source

use std::hash::Hash;

use memoindex::HashIndex;

use crate::error::Result;
use crate::queue::{Handle, RecencyQueue};
use crate::source::Source;
use crate::stats::CacheStats;

/// One resident key's cached value plus its position in the recency queue.
///
/// The handle always refers to a live queue node holding the same key; both
/// are created together on a miss and destroyed together on eviction.
struct CacheEntry<V> {
    value: V,
    handle: Handle,
}

/// Capacity-bounded lookup cache with LRU eviction.
///
/// `lookup` answers from the index when the key is resident and consults the
/// source otherwise; once the cache is full, each insertion evicts the
/// least-recently-used key first. All operations are O(1) expected.
///
/// A cache instance assumes a single logical caller; wrap it in a mutex if
/// concurrent access is needed.
pub struct MemoCache<K, V, S> {
    /// key -> cached entry
    index: HashIndex<K, CacheEntry<V>>,

    /// Resident keys, least-recently-used first
    queue: RecencyQueue<K>,

    /// Consulted at most once per miss
    source: S,

    /// Maximum resident entries
    capacity: usize,

    /// Hit/miss/eviction counters
    stats: CacheStats,
}

impl<K, V, S> MemoCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: Source<K, V>,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Arguments
    /// * `capacity` - Maximum resident entries. Zero is legal but degenerate:
    ///   every lookup consults the source and nothing is ever retained
    /// * `source` - Capability that produces a value for a missing key
    pub fn new(capacity: usize, source: S) -> Self {
        Self {
            index: HashIndex::new(capacity.max(1)),
            queue: RecencyQueue::new(),
            source,
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// Look up `key`, fetching through the source on a miss.
    ///
    /// A hit relocates the key to most-recently-used and returns a clone of
    /// the cached value; the source is not consulted. A miss fetches the
    /// value, evicts the least-recently-used key if the cache is full, and
    /// caches the result. A failed fetch propagates unchanged and leaves the
    /// cache exactly as it was.
    ///
    /// # Arguments
    /// * `key` - Key to look up
    ///
    /// # Returns
    /// * `Result<V>` - The cached or freshly fetched value
    pub fn lookup(&mut self, key: &K) -> Result<V> {
        if let Some(entry) = self.index.get(key) {
            let handle = entry.handle;
            let value = entry.value.clone();
            self.queue.move_to_back(handle)?;
            self.stats.record_hit();
            return Ok(value);
        }

        self.stats.record_miss();

        // Nothing below may touch the index or queue until the fetch has
        // succeeded; a failure must leave both structures untouched.
        let value = self.source.fetch(key)?;

        if self.capacity == 0 {
            // Degenerate configuration: never retain anything
            return Ok(value);
        }

        if self.index.len() == self.capacity {
            // Evict before inserting so size never exceeds capacity
            if let Some(evicted) = self.queue.pop_front() {
                self.index.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        let handle = self.queue.push_back(key.clone());
        self.index.insert(
            key.clone(),
            CacheEntry {
                value: value.clone(),
                handle,
            },
        );
        self.stats.record_insert();

        debug_assert_eq!(self.index.len(), self.queue.len());
        debug_assert!(self.index.len() <= self.capacity);

        Ok(value)
    }

    /// Check whether `key` is resident, without updating recency.
    pub fn contains(&self, key: &K) -> bool {
        self.index.get(key).is_some()
    }

    /// Borrow the cached value for `key` without updating recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|entry| &entry.value)
    }

    /// Borrow the key next in line for eviction.
    pub fn peek_lru(&self) -> Option<&K> {
        self.queue.front()
    }

    /// Remove `key` from the cache, returning its value if it was resident.
    ///
    /// The next lookup for the key consults the source again.
    pub fn invalidate(&mut self, key: &K) -> Result<Option<V>> {
        match self.index.remove(key) {
            Some(entry) => {
                self.queue.remove(entry.handle)?;
                Ok(Some(entry.value))
            }
            None => Ok(None),
        }
    }

    /// Drop every entry and reset statistics. The source is untouched.
    pub fn clear(&mut self) {
        self.index.clear();
        self.queue.clear();
        self.stats.reset();
        debug_assert!(self.queue.is_empty());
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the hit/miss/eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.index.len(), self.queue.len());
        assert!(self.index.len() <= self.capacity);
    }
}
