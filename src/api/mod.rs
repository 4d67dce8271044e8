//! API Module
//!
//! HTTP handlers and routing for the thought feed REST API.
//!
//! # Endpoints
//! - `GET /api/thoughts` - List thoughts, paginated and cached
//! - `POST /api/thoughts` - Create a thought
//! - `GET /api/thoughts/:id` - Fetch one thought
//! - `GET /api/cache/stats` - Page cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
