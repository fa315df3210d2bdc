use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(super::handlers::chat::index))
        // API endpoints
        .route("/api/chat", post(super::handlers::api::ask))
        // Health check
        .route("/health", get(super::handlers::health::health_check))
        .with_state(state)
}
