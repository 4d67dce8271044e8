//! TTL Cleanup Task
//!
//! Background task that periodically removes expired listing pages.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::thoughts::PageCache;

/// Spawns a background task that periodically sweeps expired pages.
///
/// Each run takes the same write lock as request handlers; the sweep is a
/// single pass over at most `max_entries` pages, so the lock is held briefly.
/// Lookups already ignore expired pages, the sweep only reclaims memory.
///
/// # Arguments
/// * `cache` - Shared handle to the page cache
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(cache: PageCache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));
    spawn_sweeper(cache, interval)
}

fn spawn_sweeper(cache: PageCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(?interval, "starting page cache TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired pages", removed);
            } else {
                debug!("TTL cleanup: no expired pages found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tokio::sync::RwLock;

    use crate::cache::CacheStore;
    use crate::models::PageResponse;
    use crate::thoughts::Pagination;

    fn page_cache(ttl_ms: u64) -> PageCache {
        Arc::new(RwLock::new(CacheStore::new(100, ttl_ms)))
    }

    fn empty_page() -> PageResponse {
        PageResponse::new(0, Pagination::default(), Vec::new())
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_pages() {
        let cache = page_cache(30);
        cache
            .write()
            .await
            .set("expire_soon".to_string(), empty_page());

        let handle = spawn_sweeper(cache.clone(), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(200)).await;

        {
            let guard = cache.read().await;
            assert!(guard.is_empty(), "Expired page should have been swept");
            assert_eq!(guard.stats().expirations, 1);
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_pages() {
        let cache = page_cache(3_600_000);
        cache
            .write()
            .await
            .set("long_lived".to_string(), empty_page());

        let handle = spawn_sweeper(cache.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.write().await.get("long_lived").is_some());

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(page_cache(1_000), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
