//! # dnd-api
//!
//! REST API server built with Axum framework.
//!
//! Handlers translate HTTP requests into service calls and map
//! [`response::ApiError`] back onto status codes and a JSON error body.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
