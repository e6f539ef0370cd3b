//! Route definitions
//!
//! API routes are mounted under /api; health probes sit at the root.

use axum::{routing::get, Router};

use crate::handlers::{characters, health, reference};
use crate::state::AppState;

/// Create the main router with API and health routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(character_routes())
        .merge(reference_routes())
}

/// Character routes
fn character_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/characters",
            get(characters::get_characters).post(characters::create_character),
        )
        .route("/characters/:id", get(characters::get_character))
}

/// Species and class catalog routes
fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/species", get(reference::list_species))
        .route("/classes", get(reference::list_classes))
}
