//! Polynomial string hashing
//!
//! The classic base-31 accumulation: `hash = sum(key[i] * 31^(n-1-i)) mod buckets`.
//! Long keys wrap around `u64`; the final modulo keeps the slot in range.

use std::hash::{BuildHasher, Hasher};

/// Prime base of the polynomial accumulation
pub const HASH_BASE: u64 = 31;

/// Hash a string into a bucket slot.
///
/// Deterministic for a given key and bucket count; the result is always
/// `< buckets`. The empty string hashes to slot 0.
///
/// # Panics
/// Panics if `buckets` is zero.
pub fn string_hash(key: &str, buckets: usize) -> usize {
    assert!(buckets > 0, "bucket count must be greater than 0");

    let mut total: u64 = 0;
    for byte in key.bytes() {
        total = total.wrapping_mul(HASH_BASE).wrapping_add(u64::from(byte));
    }

    (total % buckets as u64) as usize
}

/// [`Hasher`] running the same base-31 accumulation over raw bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyHasher {
    state: u64,
}

impl Hasher for PolyHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = self.state.wrapping_mul(HASH_BASE).wrapping_add(u64::from(byte));
        }
    }
}

/// [`BuildHasher`] producing [`PolyHasher`]s.
///
/// Default hasher of [`HashIndex`](crate::HashIndex). Stateless, so hashes
/// are stable across index instances and process runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyState;

impl BuildHasher for PolyState {
    type Hasher = PolyHasher;

    fn build_hasher(&self) -> PolyHasher {
        PolyHasher::default()
    }
}
