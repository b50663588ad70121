//! Response Cache Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and lazy TTL
//! expiration.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::error::{Result, ServiceError};

/// A cache shared between request handlers. One lock covers each whole call.
pub type SharedCache<T> = Arc<Mutex<ResponseCache<T>>>;

// == Response Cache ==
/// Bounded key-value store with per-entry expiry and LRU eviction.
///
/// Capacity is enforced on write (evict-before-insert). Expiry is enforced
/// lazily on read; there is no background sweep.
#[derive(Debug)]
pub struct ResponseCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Observability counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// TTL used when `set` is not given one
    default_ttl: Duration,
}

impl<T: Clone> ResponseCache<T> {
    // == Constructor ==
    /// Creates a new cache.
    ///
    /// # Errors
    /// `InvalidConfig` if `capacity` is zero or `default_ttl` is zero.
    pub fn new(capacity: usize, default_ttl: Duration) -> Result<Self> {
        if capacity == 0 {
            return Err(ServiceError::InvalidConfig(
                "cache capacity must be greater than zero".to_string(),
            ));
        }
        if default_ttl.is_zero() {
            return Err(ServiceError::InvalidConfig(
                "cache default TTL must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity,
            default_ttl,
        })
    }

    /// Creates a cache already wrapped for sharing across tasks.
    pub fn shared(capacity: usize, default_ttl: Duration) -> Result<SharedCache<T>> {
        Ok(Arc::new(Mutex::new(Self::new(capacity, default_ttl)?)))
    }

    // == Set ==
    /// Stores a value under `key`, replacing any previous entry.
    ///
    /// A `ttl` of `None` (or zero) falls back to the default TTL. Inserting a
    /// new key into a full cache first evicts the least recently used entry,
    /// whether or not it has already expired. Replacing an existing key never
    /// evicts.
    pub fn set(&mut self, key: impl Into<String>, value: T, ttl: Option<Duration>) {
        self.set_at(key.into(), value, ttl, Instant::now());
    }

    pub(crate) fn set_at(&mut self, key: String, value: T, ttl: Option<Duration>, now: Instant) {
        if key.is_empty() {
            warn!("[Cache] Ignoring set with empty key");
            return;
        }

        let is_replace = self.entries.contains_key(&key);

        if !is_replace && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!("[Cache] Evicted: {}", evicted);
            }
        }

        let ttl = ttl.filter(|t| !t.is_zero()).unwrap_or(self.default_ttl);
        debug!("[Cache] Set: {} (expires in {}s)", key, ttl.as_secs_f64());

        self.lru.touch(&key);
        self.entries.insert(key, CacheEntry::new(value, now, ttl));
        self.stats.set_total_entries(self.entries.len());
        debug_assert_eq!(self.lru.len(), self.entries.len());
    }

    // == Get ==
    /// Returns a clone of the live value for `key`.
    ///
    /// A hit moves the key to the most recently used position. An expired
    /// entry is removed and reported as absent without being promoted.
    pub fn get(&mut self, key: &str) -> Option<T> {
        self.get_at(key, Instant::now())
    }

    pub(crate) fn get_at(&mut self, key: &str, now: Instant) -> Option<T> {
        let expired = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired_at(now),
        };

        if expired {
            debug!("[Cache] Expired: {}", key);
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        debug!("[Cache] Hit: {}", key);
        self.lru.touch(key);
        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.data.clone())
    }

    // == Clear ==
    /// Drops every entry regardless of expiry. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        if self.is_empty() {
            return 0;
        }

        let removed = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.set_total_entries(0);
        debug!("[Cache] Cleared {} entries", removed);
        removed
    }

    /// Whether `key` physically occupies a slot. Does not touch or check expiry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of entries, including expired ones not yet reclaimed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
