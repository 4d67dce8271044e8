//! Response DTOs for the thought feed API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::store::ThoughtRecord;
use crate::thoughts::Pagination;

/// A thought as listed, with its reaction count computed at shaping time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtSummary {
    #[serde(flatten)]
    pub thought: ThoughtRecord,
    pub reaction_count: usize,
}

impl From<ThoughtRecord> for ThoughtSummary {
    fn from(thought: ThoughtRecord) -> Self {
        Self {
            reaction_count: thought.reactions.len(),
            thought,
        }
    }
}

/// Response body for `GET /api/thoughts`, and the value held by the page cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    /// Size of the whole collection at query time
    pub total_thoughts: u64,
    /// `ceil(total_thoughts / limit)`
    pub total_pages: u64,
    /// Requested page, never clamped to `total_pages`
    pub current_page: u64,
    /// Newest first, at most `limit` items
    pub thoughts: Vec<ThoughtSummary>,
}

impl PageResponse {
    /// Shapes a fetched page.
    pub fn new(total_thoughts: u64, pagination: Pagination, thoughts: Vec<ThoughtRecord>) -> Self {
        Self {
            total_thoughts,
            total_pages: pagination.total_pages(total_thoughts),
            current_page: pagination.page,
            thoughts: thoughts.into_iter().map(ThoughtSummary::from).collect(),
        }
    }
}

/// Response body for the stats endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    /// Current number of cached pages
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Plain acknowledgement body, e.g. for `DELETE /api/thoughts/:id`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
