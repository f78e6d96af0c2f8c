//! Liveness endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Liveness report with the size of the live inventory.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// Crate version of the running binary.
    pub version: &'static str,
    /// Active products in the catalog.
    pub products: usize,
    /// Records in the movement journal.
    pub history: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        products: store.products().len(),
        history: store.history().len(),
    })
}

/// Returns the router for the liveness endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
