//! Cache Module
//!
//! In-memory page cache with absolute TTL expiration and LRU eviction.

mod entry;
mod keys;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use keys::page_key;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default number of cached pages
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default page lifetime in milliseconds
pub const DEFAULT_TTL_MS: u64 = 60_000;
