pub mod health;
pub mod quiz;
pub mod rankings;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::AppState;

/// Create the main API router
pub fn create_api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/keywords", get(quiz::get_keywords))
        .route("/problem", post(quiz::create_problem))
        .route(
            "/rankings",
            get(rankings::list_rankings).post(rankings::submit_ranking),
        )
        .route("/health", get(health::health_handler))
        .with_state(state)
}
