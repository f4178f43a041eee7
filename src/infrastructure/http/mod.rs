//! HTTP REST API routes

mod creature_routes;
pub mod error;

use axum::{routing::post, Router};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/generate", post(creature_routes::generate_creature))
        .route(
            "/api/generate/random",
            post(creature_routes::generate_random_creature),
        )
        .route("/api/generateImage", post(creature_routes::generate_image))
}
