//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Cache Store ==
/// Bounded cache with LRU capacity eviction and absolute TTL expiry.
///
/// Both policies are independent: reads refresh an entry's LRU rank but never
/// extend its lifetime. Operations are total; a lookup that cannot be served
/// reports `None`.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Lifetime of every entry in milliseconds
    ttl_ms: u64,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and TTL.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries (0 is treated as 1)
    /// * `ttl_ms` - Entry lifetime in milliseconds, measured from insertion
    pub fn new(max_entries: usize, ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl_ms,
        }
    }

    // == Set ==
    /// Inserts or overwrites a value.
    ///
    /// The entry's insertion time is reset and it becomes the most recently
    /// used. Inserting a new key into a full cache evicts the least recently
    /// used entry first. Returns a handle to the stored value.
    pub fn set(&mut self, key: String, value: V) -> Arc<V> {
        self.set_at(key, value, current_timestamp_ms())
    }

    /// [`set`](Self::set) against an explicit clock reading.
    pub fn set_at(&mut self, key: String, value: V, now: u64) -> Arc<V> {
        if !self.entries.contains_key(&key) {
            while self.entries.len() >= self.max_entries {
                let Some(evicted) = self.lru.evict_oldest() else {
                    break;
                };
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "evicted least recently used entry");
            }
        }

        let entry = CacheEntry::inserted_at(value, self.ttl_ms, now);
        let stored = Arc::clone(&entry.value);
        self.entries.insert(key.clone(), entry);
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
        stored
    }

    // == Get ==
    /// Returns the stored value if present and not expired.
    ///
    /// A hit promotes the entry to most recently used. An expired entry is
    /// removed and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<Arc<V>> {
        self.get_at(key, current_timestamp_ms())
    }

    /// [`get`](Self::get) against an explicit clock reading.
    pub fn get_at(&mut self, key: &str, now: u64) -> Option<Arc<V>> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.lru.touch(key);
        self.entries.get(key).map(|entry| Arc::clone(&entry.value))
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(current_timestamp_ms())
    }

    /// [`cleanup_expired`](Self::cleanup_expired) against an explicit clock reading.
    pub fn cleanup_expired_at(&mut self, now: u64) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        self.stats.set_total_entries(self.entries.len());
        expired_keys.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }
}
