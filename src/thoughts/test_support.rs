//! Store fixtures shared by the listing tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::store::{
    FindOptions, MemoryStore, StoreError, ThoughtRecord, ThoughtStore, ThoughtUpdate,
};

/// `count` thoughts one minute apart; "thought {count-1}" is the newest.
pub fn seeded_thoughts(count: i64) -> Vec<ThoughtRecord> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let mut thought = ThoughtRecord::new(format!("thought {i}"), "ada");
            thought.created_at = base + chrono::Duration::minutes(i);
            thought
        })
        .collect()
}

/// Memory store that can be switched offline and counts page fetch attempts.
///
/// A page fetch always starts with `count`, so attempts are tallied there;
/// `find` is skipped when `count` already failed.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing: AtomicBool,
    fetches: AtomicUsize,
}

impl FlakyStore {
    pub fn seeded(count: i64) -> Self {
        Self {
            inner: MemoryStore::with_thoughts(seeded_thoughts(count)),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ThoughtStore for FlakyStore {
    async fn count(&self) -> Result<u64, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.count().await
    }

    async fn find(&self, options: FindOptions) -> Result<Vec<ThoughtRecord>, StoreError> {
        self.check()?;
        self.inner.find(options).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ThoughtRecord>, StoreError> {
        self.check()?;
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, thought: ThoughtRecord) -> Result<ThoughtRecord, StoreError> {
        self.check()?;
        self.inner.insert(thought).await
    }

    async fn update(
        &self,
        id: Uuid,
        update: ThoughtUpdate,
    ) -> Result<Option<ThoughtRecord>, StoreError> {
        self.check()?;
        self.inner.update(id, update).await
    }

    async fn delete(&self, id: Uuid) -> Result<Option<ThoughtRecord>, StoreError> {
        self.check()?;
        self.inner.delete(id).await
    }
}

/// Store whose page fetch never finishes within any reasonable deadline.
pub struct StalledStore;

#[async_trait]
impl ThoughtStore for StalledStore {
    async fn count(&self) -> Result<u64, StoreError> {
        Ok(0)
    }

    async fn find(&self, _options: FindOptions) -> Result<Vec<ThoughtRecord>, StoreError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<ThoughtRecord>, StoreError> {
        Ok(None)
    }

    async fn insert(&self, thought: ThoughtRecord) -> Result<ThoughtRecord, StoreError> {
        Ok(thought)
    }

    async fn update(
        &self,
        _id: Uuid,
        _update: ThoughtUpdate,
    ) -> Result<Option<ThoughtRecord>, StoreError> {
        Ok(None)
    }

    async fn delete(&self, _id: Uuid) -> Result<Option<ThoughtRecord>, StoreError> {
        Ok(None)
    }
}
