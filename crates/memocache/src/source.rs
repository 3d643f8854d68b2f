//! Value source capability
//!
//! The cache fronts something slow: a disk read, an expensive computation, a
//! remote call the caller wraps synchronously. `Source` is that
//! single-operation capability; any `FnMut(&K) -> Result<V>` closure is a
//! source, so tests substitute deterministic fakes with no extra plumbing.

use crate::error::Result;

/// Produces the value for a key on a cache miss.
///
/// The cache invokes `fetch` at most once per miss and never caches a
/// failure; looking the key up again retries from scratch. A slow `fetch`
/// blocks the caller for its full duration; there are no timeouts here.
pub trait Source<K, V> {
    /// Produce the value for `key`, or fail without any cache-side effects.
    fn fetch(&mut self, key: &K) -> Result<V>;
}

impl<K, V, F> Source<K, V> for F
where
    F: FnMut(&K) -> Result<V>,
{
    fn fetch(&mut self, key: &K) -> Result<V> {
        self(key)
    }
}
