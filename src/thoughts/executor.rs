//! Paginated query executor.
//!
//! Turns an effective [`Pagination`] into a shaped [`PageResponse`] by reading
//! the authoritative store.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::models::PageResponse;
use crate::store::{FindOptions, StoreError, ThoughtStore};
use crate::thoughts::Pagination;

// == Page Executor ==
/// Runs the count + sorted page fetch against a [`ThoughtStore`].
#[derive(Clone)]
pub struct PageExecutor {
    store: Arc<dyn ThoughtStore>,
    timeout: Duration,
}

impl PageExecutor {
    /// Creates an executor whose store calls are each bounded by `timeout`.
    pub fn new(store: Arc<dyn ThoughtStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub fn store(&self) -> &Arc<dyn ThoughtStore> {
        &self.store
    }

    // == Fetch ==
    /// Fetches one page, newest first.
    ///
    /// The count and the fetch are issued concurrently and are not a snapshot:
    /// under concurrent writes the totals may disagree slightly with `thoughts`.
    /// A page past the end yields an empty list with correct totals.
    pub async fn fetch(&self, pagination: Pagination) -> Result<PageResponse, StoreError> {
        let options = FindOptions {
            skip: pagination.skip(),
            limit: pagination.limit,
        };

        let result = tokio::try_join!(
            self.bounded(self.store.count()),
            self.bounded(self.store.find(options)),
        );

        let (total, thoughts) = match result {
            Ok(parts) => parts,
            Err(err) => {
                match &err {
                    StoreError::Timeout(_) => warn!(error = %err, ?pagination, "page fetch timed out"),
                    StoreError::Unavailable(_) => error!(error = %err, ?pagination, "page fetch failed"),
                }
                return Err(err);
            }
        };

        debug!(
            page = pagination.page,
            limit = pagination.limit,
            total,
            returned = thoughts.len(),
            "fetched thought page"
        );

        Ok(PageResponse::new(total, pagination, thoughts))
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Reaction, ThoughtRecord};
    use crate::thoughts::test_support::{seeded_thoughts, FlakyStore, StalledStore};
    use chrono::Utc;
    use uuid::Uuid;

    fn executor(store: impl ThoughtStore + 'static) -> PageExecutor {
        PageExecutor::new(Arc::new(store), Duration::from_secs(5))
    }

    fn texts(page: &PageResponse) -> Vec<String> {
        page.thoughts
            .iter()
            .map(|t| t.thought.thought_text.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_second_page_of_25() {
        let executor = executor(MemoryStore::with_thoughts(seeded_thoughts(25)));

        let page = executor.fetch(Pagination::new(2, 10)).await.unwrap();

        assert_eq!(page.total_thoughts, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 2);
        // items 11..=20 newest first: thought 14 down to thought 5
        let expected: Vec<String> = (5..15).rev().map(|i| format!("thought {i}")).collect();
        assert_eq!(texts(&page), expected);
    }

    #[tokio::test]
    async fn test_last_partial_page() {
        let executor = executor(MemoryStore::with_thoughts(seeded_thoughts(25)));

        let page = executor.fetch(Pagination::new(3, 10)).await.unwrap();

        assert_eq!(page.thoughts.len(), 5);
        assert_eq!(page.thoughts[4].thought.thought_text, "thought 0");
    }

    #[tokio::test]
    async fn test_page_beyond_range_is_empty() {
        let executor = executor(MemoryStore::with_thoughts(seeded_thoughts(25)));

        let page = executor.fetch(Pagination::new(100, 10)).await.unwrap();

        assert!(page.thoughts.is_empty());
        assert_eq!(page.total_thoughts, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 100);
    }

    #[tokio::test]
    async fn test_reaction_counts() {
        let mut with_reactions = ThoughtRecord::new("popular", "ada");
        with_reactions.reactions = (0..3)
            .map(|i| Reaction {
                reaction_id: Uuid::new_v4(),
                reaction_body: format!("reaction {i}"),
                user_id: Uuid::new_v4(),
                username: "grace".to_string(),
                created_at: Utc::now(),
            })
            .collect();
        let mut quiet = ThoughtRecord::new("quiet", "ada");
        quiet.created_at = with_reactions.created_at - chrono::Duration::minutes(1);

        let executor = executor(MemoryStore::with_thoughts(vec![quiet, with_reactions]));
        let page = executor.fetch(Pagination::default()).await.unwrap();

        assert_eq!(page.thoughts[0].thought.thought_text, "popular");
        assert_eq!(page.thoughts[0].reaction_count, 3);
        assert_eq!(page.thoughts[1].reaction_count, 0);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = FlakyStore::seeded(5);
        store.set_failing(true);
        let executor = executor(store);

        let result = executor.fetch(Pagination::default()).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_slow_store_times_out() {
        let executor = PageExecutor::new(Arc::new(StalledStore), Duration::from_millis(20));

        let result = executor.fetch(Pagination::default()).await;
        assert_eq!(result, Err(StoreError::Timeout(Duration::from_millis(20))));
    }
}
