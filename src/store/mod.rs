//! Storage Module
//!
//! The document-store collaborator the listing path reads from. Handlers only
//! see the [`ThoughtStore`] trait; [`MemoryStore`] is the in-process adapter.

mod memory;
mod records;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use records::{Reaction, ThoughtRecord};

// == Store Error ==
/// Failure reaching or querying the authoritative store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or rejected the query
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store did not answer within the configured deadline
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),
}

// == Query Options ==
/// Offset and limit applied to a newest-first collection scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    pub skip: u64,
    pub limit: u64,
}

/// Replacement values for the editable fields of a thought.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThoughtUpdate {
    pub thought_text: String,
    pub username: String,
    pub user_id: Option<Uuid>,
}

// == Thought Store ==
/// Read/write access to the thought collection.
#[async_trait]
pub trait ThoughtStore: Send + Sync {
    /// Total number of thoughts, unfiltered.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Thoughts ordered by `createdAt` descending, skipping `options.skip`
    /// records and returning at most `options.limit`.
    async fn find(&self, options: FindOptions) -> Result<Vec<ThoughtRecord>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ThoughtRecord>, StoreError>;

    /// Persists a new thought and returns the stored record.
    async fn insert(&self, thought: ThoughtRecord) -> Result<ThoughtRecord, StoreError>;

    /// Applies `update` to the thought with `id`; `None` when no such thought.
    /// Id, creation time and reactions are kept.
    async fn update(
        &self,
        id: Uuid,
        update: ThoughtUpdate,
    ) -> Result<Option<ThoughtRecord>, StoreError>;

    /// Removes the thought with `id`, returning it if it existed.
    async fn delete(&self, id: Uuid) -> Result<Option<ThoughtRecord>, StoreError>;
}
