//! API Handlers
//!
//! HTTP request handlers for each thought feed endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    CreateThoughtRequest, HealthResponse, MessageResponse, PageQuery, PageResponse,
    StatsResponse, ThoughtSummary,
};
use crate::store::{ThoughtRecord, ThoughtStore};
use crate::thoughts::{PageCache, PageExecutor, Pagination, ThoughtFeed};

/// Application state shared across all handlers.
///
/// Built once at startup; every clone shares the same page cache and store.
#[derive(Clone)]
pub struct AppState {
    /// Cached listing path
    pub feed: ThoughtFeed,
}

impl AppState {
    /// Creates a new AppState over `store` with an explicit cache and store deadline.
    pub fn new(
        store: Arc<dyn ThoughtStore>,
        cache: CacheStore<PageResponse>,
        store_timeout: Duration,
    ) -> Self {
        let executor = PageExecutor::new(store, store_timeout);
        Self {
            feed: ThoughtFeed::new(cache, executor),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config, store: Arc<dyn ThoughtStore>) -> Self {
        let cache = CacheStore::new(config.cache_max_entries, config.cache_ttl_ms);
        Self::new(store, cache, config.store_timeout())
    }

    /// Shared handle to the page cache, for the cleanup task.
    pub fn cache(&self) -> PageCache {
        Arc::clone(self.feed.cache())
    }

    fn store(&self) -> &Arc<dyn ThoughtStore> {
        self.feed.executor().store()
    }
}

/// Handler for GET /api/thoughts
///
/// Lists thoughts newest first, served from the page cache when fresh.
/// The query string is taken as raw pairs so repeated names cannot be rejected.
pub async fn list_thoughts_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Arc<PageResponse>>> {
    let pagination = Pagination::from_query(&PageQuery::from_pairs(params));
    let page = state.feed.list(pagination).await?;
    Ok(Json(page))
}

/// Handler for GET /api/thoughts/:id
///
/// Uncached single-thought lookup. Ids that are not UUIDs are reported as
/// not found.
pub async fn get_thought_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ThoughtSummary>> {
    let thought_id = parse_thought_id(&id)?;

    let thought = state
        .store()
        .find_by_id(thought_id)
        .await?
        .ok_or(AppError::ThoughtNotFound(id))?;

    Ok(Json(ThoughtSummary::from(thought)))
}

/// Handler for POST /api/thoughts
///
/// Stores a new thought. Cached listing pages are left as they are and pick the
/// thought up once their TTL lapses.
pub async fn create_thought_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateThoughtRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ThoughtRecord>)> {
    let Json(req) = payload?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let mut thought = ThoughtRecord::new(req.thought_text, req.username);
    thought.user_id = req.user_id;

    let stored = state.store().insert(thought).await?;
    info!(id = %stored.id, username = %stored.username, "thought created");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Handler for PUT /api/thoughts/:id
///
/// Replaces the text and author of a thought. Cached pages keep the old
/// version until their TTL lapses.
pub async fn update_thought_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<CreateThoughtRequest>, JsonRejection>,
) -> Result<Json<ThoughtRecord>> {
    let Json(req) = payload?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }
    let thought_id = parse_thought_id(&id)?;

    let updated = state
        .store()
        .update(thought_id, req.into_update())
        .await?
        .ok_or(AppError::ThoughtNotFound(id))?;
    info!(id = %updated.id, "thought updated");

    Ok(Json(updated))
}

/// Handler for DELETE /api/thoughts/:id
///
/// Cached pages keep listing the thought until their TTL lapses.
pub async fn delete_thought_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let thought_id = parse_thought_id(&id)?;

    let removed = state
        .store()
        .delete(thought_id)
        .await?
        .ok_or(AppError::ThoughtNotFound(id))?;
    info!(id = %removed.id, "thought deleted");

    Ok(Json(MessageResponse::new("Thought deleted")))
}

/// Handler for GET /api/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.feed.cache().read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Ids that are not UUIDs cannot name a stored thought.
fn parse_thought_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::ThoughtNotFound(id.to_string()))
}
