pub mod dto;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

// Re-export for convenience
pub use crate::infrastructure::app_state::AppState;

/// Upper bound for one request, above the LLM client timeout
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Full HTTP application: `/api` routes, `/health`, CORS open to every origin
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", routes::create_api_router(state.clone()))
        .route(
            "/health",
            axum::routing::get(routes::health::health_handler),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
