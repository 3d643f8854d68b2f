//! Cache statistics tracking

/// Counters for cache performance tracking.
///
/// The cache records into its own copy and hands out snapshots via
/// [`MemoCache::stats`](crate::MemoCache::stats); plain integers suffice
/// because a cache instance has a single logical caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    evictions: u64,
    inserts: u64,
}

impl CacheStats {
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_insert(&mut self) {
        self.inserts += 1;
    }

    /// Lookups answered without consulting the source
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to consult the source
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Entries evicted to make room for new insertions
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Entries inserted after a successful fetch
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// Hit ratio (0.0 to 1.0); 0.0 before any lookup completes
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Reset all counters to zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let mut stats = CacheStats::default();

        stats.record_hit();
        stats.record_hit();
        stats.record_miss();

        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 1);
        assert_eq!(stats.hit_ratio(), 2.0 / 3.0);
    }

    #[test]
    fn test_stats_empty_ratio() {
        let stats = CacheStats::default();
        assert_eq!(stats.hit_ratio(), 0.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = CacheStats::default();

        stats.record_hit();
        stats.record_miss();
        stats.record_eviction();
        stats.record_insert();
        stats.reset();

        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.hit_ratio(), 0.0);
    }
}
