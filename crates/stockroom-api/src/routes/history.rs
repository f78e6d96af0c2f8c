//! Routes for the stock movement history.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use stockroom_core::movement::MovementRecord;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::state::AppState;

/// Response body carrying the movement history.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Human-readable outcome.
    pub message: &'static str,
    /// Movement records, oldest first.
    pub history: Vec<MovementRecord>,
}

/// Response body for a history purge.
#[derive(Debug, Serialize)]
pub struct ClearedResponse {
    /// Human-readable outcome.
    pub message: &'static str,
    /// Number of records removed.
    pub cleared: usize,
}

/// GET /history
async fn list_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let store = state.store.read().await;
    Json(HistoryResponse {
        message: "History retrieved",
        history: store.history().to_vec(),
    })
}

/// DELETE /history
#[instrument(skip(state))]
async fn clear_history(State(state): State<AppState>) -> Json<ClearedResponse> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling clear_history request");

    let cleared = state.store.write().await.clear_history().await;

    Json(ClearedResponse {
        message: "History cleared",
        cleared,
    })
}

/// Returns the router for the movement history.
pub fn router() -> Router<AppState> {
    Router::new().route("/history", get(list_history).delete(clear_history))
}
