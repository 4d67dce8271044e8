//! In-process thought store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{FindOptions, StoreError, ThoughtRecord, ThoughtStore, ThoughtUpdate};

// == Memory Store ==
/// Keeps the thought collection in a `Vec` behind an async `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    thoughts: RwLock<Vec<ThoughtRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `thoughts`.
    pub fn with_thoughts(thoughts: Vec<ThoughtRecord>) -> Self {
        Self {
            thoughts: RwLock::new(thoughts),
        }
    }
}

#[async_trait]
impl ThoughtStore for MemoryStore {
    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.thoughts.read().await.len() as u64)
    }

    async fn find(&self, options: FindOptions) -> Result<Vec<ThoughtRecord>, StoreError> {
        let thoughts = self.thoughts.read().await;

        let mut ordered: Vec<&ThoughtRecord> = thoughts.iter().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let skip = usize::try_from(options.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(options.limit).unwrap_or(usize::MAX);

        Ok(ordered
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ThoughtRecord>, StoreError> {
        let thoughts = self.thoughts.read().await;
        Ok(thoughts.iter().find(|t| t.id == id).cloned())
    }

    async fn insert(&self, thought: ThoughtRecord) -> Result<ThoughtRecord, StoreError> {
        self.thoughts.write().await.push(thought.clone());
        Ok(thought)
    }

    async fn update(
        &self,
        id: Uuid,
        update: ThoughtUpdate,
    ) -> Result<Option<ThoughtRecord>, StoreError> {
        let mut thoughts = self.thoughts.write().await;
        let Some(thought) = thoughts.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        thought.thought_text = update.thought_text;
        thought.username = update.username;
        thought.user_id = update.user_id;
        Ok(Some(thought.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<ThoughtRecord>, StoreError> {
        let mut thoughts = self.thoughts.write().await;
        let index = thoughts.iter().position(|t| t.id == id);
        Ok(index.map(|index| thoughts.remove(index)))
    }
}
