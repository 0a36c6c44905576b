use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
}

static START_TIME: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

/// Record the process start; called once from `main`
pub fn mark_started() {
    START_TIME.get_or_init(std::time::Instant::now);
}

pub async fn health_handler() -> Json<HealthResponse> {
    let start = START_TIME.get_or_init(std::time::Instant::now);

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: start.elapsed().as_secs(),
    })
}
