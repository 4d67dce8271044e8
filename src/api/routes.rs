//! API Routes
//!
//! Configures the Axum router with all thought feed endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_thought_handler, delete_thought_handler, get_thought_handler, health_handler,
    list_thoughts_handler, stats_handler, update_thought_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/thoughts",
            get(list_thoughts_handler).post(create_thought_handler),
        )
        .route(
            "/api/thoughts/:id",
            get(get_thought_handler)
                .put(update_thought_handler)
                .delete(delete_thought_handler),
        )
        .route("/api/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
