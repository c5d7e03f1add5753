// src/routes/mod.rs
pub mod assistant;

use crate::state::SharedState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use assistant::assistant_handler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    // Mirrors the caller's origin and allows credentials; development posture.
    let cors = CorsLayer::very_permissive();

    Router::new()
        .route("/api/assistant", post(assistant_handler))
        .route("/health", get(|| async { "OK" }))
        // Messages have no length cap.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
