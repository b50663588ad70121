//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an absolute expiry.

use std::time::{Duration, Instant};

/// Longest lifetime an entry can be given (about a century). Larger TTLs are
/// clamped so the expiry instant stays representable.
pub const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// A cached value together with the instant after which it is no longer readable.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value, opaque to the cache
    pub data: T,
    /// Absolute expiry, fixed at write time
    pub expiry: Instant,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`, with `ttl` clamped to
    /// [`MAX_TTL`].
    pub fn new(data: T, now: Instant, ttl: Duration) -> Self {
        let expiry = now.checked_add(ttl.min(MAX_TTL)).unwrap_or(now);
        Self { data, expiry }
    }

    // == Is Expired ==
    /// Checks whether the entry is dead at `now`.
    ///
    /// An entry stays readable at exactly its expiry instant and dies strictly
    /// after it.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now > self.expiry
    }
}
