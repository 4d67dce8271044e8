//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with absolute TTL.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A stored page payload plus the timestamps needed for age-based expiry.
///
/// The value is shared behind an `Arc` so hits hand out the same immutable
/// payload without copying it.
#[derive(Debug)]
pub struct CacheEntry<V> {
    /// The stored value, never mutated after insertion
    pub value: Arc<V>,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry that expires `ttl_ms` after now.
    pub fn new(value: V, ttl_ms: u64) -> Self {
        Self::inserted_at(value, ttl_ms, current_timestamp_ms())
    }

    /// Creates an entry as if it had been inserted at `now` (Unix milliseconds).
    pub fn inserted_at(value: V, ttl_ms: u64, now: u64) -> Self {
        Self {
            value: Arc::new(value),
            inserted_at: now,
            expires_at: now.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once `now - inserted_at >= ttl`, i.e. the boundary
    /// instant itself already counts as expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Expiry check against an explicit clock reading.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.expires_at
    }

    /// Remaining lifetime in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as 0 rather than panicking.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
