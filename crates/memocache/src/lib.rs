//! # memocache
//!
//! Capacity-bounded LRU lookup cache fronting a slow value source.
//!
//! ## Architecture
//! - **Index**: memoindex chained hash table, key -> cached entry (O(1))
//! - **Recency queue**: arena-backed doubly-linked list for eviction (O(1))
//! - **Source**: single-method capability consulted at most once per miss
//!
//! A lookup hits the index first; on a miss the source is consulted, the
//! value cached, and the least-recently-used key evicted once the cache is
//! full. A hit only relocates the key to most-recently-used; the value is
//! never refetched while the key stays resident.

#![warn(missing_docs)]

mod cache;
mod error;
mod queue;
mod source;
mod stats;

pub use cache::MemoCache;
pub use error::{Error, Result};
pub use source::Source;
pub use stats::CacheStats;
