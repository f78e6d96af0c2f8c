//! Stockroom — HTTP adapter over the inventory store.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the full application router over `state`.
#[must_use]
pub fn build_router(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::products::router())
        .merge(routes::stock::router())
        .merge(routes::history::router())
        .with_state(state)
}
