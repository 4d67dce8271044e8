//! Read-through page cache in front of the executor.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{page_key, CacheStore};
use crate::models::PageResponse;
use crate::store::StoreError;
use crate::thoughts::{PageExecutor, Pagination};

/// Shared handle to the listing cache.
pub type PageCache = Arc<RwLock<CacheStore<PageResponse>>>;

// == Thought Feed ==
/// The cached `list thoughts` operation.
///
/// Created once at startup and cloned into request handlers; clones share the
/// same cache. The lock is never held across a store call, so a slow miss does
/// not serialize unrelated requests. Concurrent misses on one key may both hit
/// the store; the later `set` wins.
#[derive(Clone)]
pub struct ThoughtFeed {
    cache: PageCache,
    executor: PageExecutor,
}

impl ThoughtFeed {
    pub fn new(cache: CacheStore<PageResponse>, executor: PageExecutor) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            executor,
        }
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    pub fn executor(&self) -> &PageExecutor {
        &self.executor
    }

    // == List ==
    /// Returns the page for `pagination`, from cache when fresh.
    ///
    /// Store failures propagate unchanged and leave the cache untouched.
    pub async fn list(&self, pagination: Pagination) -> Result<Arc<PageResponse>, StoreError> {
        let key = page_key(&pagination);

        // Write lock: a hit updates LRU order and stats.
        if let Some(page) = self.cache.write().await.get(&key) {
            debug!(%key, "page cache hit");
            return Ok(page);
        }

        debug!(%key, "page cache miss");
        let page = self.executor.fetch(pagination).await?;

        Ok(self.cache.write().await.set(key, page))
    }
}
