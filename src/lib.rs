//! Thought Feed - social-network thought listing API
//!
//! Serves paginated thought listings through a bounded read-through cache
//! with TTL expiration and LRU eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;
pub mod thoughts;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
