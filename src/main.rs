use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use find_hallucination::api;
use find_hallucination::infrastructure::app_state::AppState;
use find_hallucination::infrastructure::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "find_hallucination=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    api::routes::health::mark_started();

    let config = ServerConfig::from_env();

    // Initialize application state
    let state = AppState::new(&config).await?;
    let app = api::create_app(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting find-hallucination backend on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
