//! Stockroom inventory API server entry point.

use std::sync::Arc;

use stockroom_api::config::ApiConfig;
use stockroom_api::error::AppError;
use stockroom_api::state::AppState;
use stockroom_core::clock::SystemClock;
use stockroom_inventory::application::store::InventoryStore;
use stockroom_snapshot_store::json_file_repository::JsonFileSnapshotRepository;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Stockroom inventory API server");

    let config = ApiConfig::from_env()?;
    let addr = config.socket_addr()?;

    // Restore the store before accepting requests.
    let repository = Arc::new(JsonFileSnapshotRepository::new(&config.data_file));
    let store = InventoryStore::open(Arc::new(SystemClock), repository).await;

    let app = stockroom_api::build_router(AppState::new(store))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!(data_file = %config.data_file.display(), "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
