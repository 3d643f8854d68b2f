//! # memoindex
//!
//! Keyed index primitives backing memocache.
//!
//! ## Architecture
//! - **Hash function**: base-31 polynomial accumulation over key bytes
//! - **Index**: separate-chaining table with owned buckets, O(1) expected ops
//! - **Integration**: memocache stores its per-key cache entries here

#![warn(missing_docs)]

mod hash;
mod table;

pub use hash::{string_hash, PolyHasher, PolyState, HASH_BASE};
pub use table::HashIndex;
