//! Routes for stock-in and stock-out movements.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use stockroom_inventory::domain::commands::{MoveStock, StockDraft};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::routes::products::ProductResponse;
use crate::state::AppState;

/// POST /stock/in
#[instrument(skip(state, draft), fields(product_id = ?draft.id))]
async fn stock_in(
    State(state): State<AppState>,
    Json(draft): Json<StockDraft>,
) -> Result<Json<ProductResponse>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling stock_in request");

    let command = MoveStock::try_from(draft)?;
    let product = state.store.write().await.receive(command).await?;

    Ok(Json(ProductResponse {
        message: "Stock increased",
        product,
    }))
}

/// POST /stock/out
#[instrument(skip(state, draft), fields(product_id = ?draft.id))]
async fn stock_out(
    State(state): State<AppState>,
    Json(draft): Json<StockDraft>,
) -> Result<Json<ProductResponse>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling stock_out request");

    let command = MoveStock::try_from(draft)?;
    let product = state.store.write().await.dispatch(command).await?;

    Ok(Json(ProductResponse {
        message: "Stock decreased",
        product,
    }))
}

/// Returns the router for stock movements.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stock/in", post(stock_in))
        .route("/stock/out", post(stock_out))
}
