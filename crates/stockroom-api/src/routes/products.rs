//! Routes for the product catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::{delete, get}};
use serde::Serialize;
use stockroom_core::product::Product;
use stockroom_inventory::domain::commands::{AddProduct, ProductDraft};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body carrying the product list.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    /// Human-readable outcome.
    pub message: &'static str,
    /// Active products in insertion order.
    pub products: Vec<Product>,
}

/// Response body carrying one product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    /// Human-readable outcome.
    pub message: &'static str,
    /// The product created, removed or adjusted.
    pub product: Product,
}

/// GET /products
async fn list_products(State(state): State<AppState>) -> Json<ProductsResponse> {
    let store = state.store.read().await;
    Json(ProductsResponse {
        message: "Products retrieved",
        products: store.products().to_vec(),
    })
}

/// POST /products
#[instrument(skip(state, draft), fields(product_id = ?draft.id))]
async fn add_product(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling add_product request");

    let command = AddProduct::try_from(draft)?;
    let product = state.store.write().await.add_product(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            message: "Product added",
            product,
        }),
    ))
}

/// DELETE /products/{id}
#[instrument(skip(state))]
async fn remove_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling remove_product request");

    let product = state.store.write().await.remove_product(&id).await?;

    Ok(Json(ProductResponse {
        message: "Product removed",
        product,
    }))
}

/// Returns the router for the product catalog.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(add_product))
        .route("/products/{id}", delete(remove_product))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;
    use stockroom_test_support::{
        EmptySnapshotRepository, FailingSnapshotRepository, RecordingSnapshotRepository,
    };

    use super::router;
    use crate::routes::testing::{send, state_with};

    fn widget() -> serde_json::Value {
        json!({ "id": "sku-1", "name": "Widget", "category": "Tools", "quantity": 5 })
    }

    #[tokio::test]
    async fn test_add_product_returns_201_with_product() {
        // Arrange
        let app = router().with_state(state_with(Arc::new(EmptySnapshotRepository)).await);

        // Act
        let (status, json) = send(app, "POST", "/products", Some(&widget())).await;

        // Assert
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Product added");
        assert_eq!(json["product"]["id"], "sku-1");
        assert_eq!(json["product"]["quantity"], 5);
    }

    #[tokio::test]
    async fn test_add_product_accepts_string_quantity() {
        let app = router().with_state(state_with(Arc::new(EmptySnapshotRepository)).await);
        let body = json!({ "id": "sku-1", "name": "Widget", "category": "Tools", "quantity": "12" });

        let (status, json) = send(app, "POST", "/products", Some(&body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["product"]["quantity"], 12);
    }

    #[tokio::test]
    async fn test_add_product_returns_400_for_missing_field() {
        let app = router().with_state(state_with(Arc::new(EmptySnapshotRepository)).await);
        let body = json!({ "id": "sku-1", "category": "Tools", "quantity": 5 });

        let (status, json) = send(app, "POST", "/products", Some(&body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "missing_field");
        assert_eq!(json["message"], "missing required field: name");
    }

    #[tokio::test]
    async fn test_add_product_returns_400_for_invalid_quantity() {
        let app = router().with_state(state_with(Arc::new(EmptySnapshotRepository)).await);
        let body = json!({ "id": "sku-1", "name": "Widget", "category": "Tools", "quantity": -3 });

        let (status, json) = send(app, "POST", "/products", Some(&body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_quantity");
        assert_eq!(json["message"], "quantity must be positive");
    }

    #[tokio::test]
    async fn test_add_product_accepts_numeric_id() {
        let app = router().with_state(state_with(Arc::new(EmptySnapshotRepository)).await);
        let body = json!({ "id": 42, "name": "Widget", "category": "Tools", "quantity": 5 });

        let (status, json) = send(app, "POST", "/products", Some(&body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["product"]["id"], "42");
    }

    #[tokio::test]
    async fn test_add_product_returns_400_body_for_non_text_name() {
        let app = router().with_state(state_with(Arc::new(EmptySnapshotRepository)).await);
        let body = json!({ "id": "sku-1", "name": true, "category": "Tools", "quantity": 5 });

        let (status, json) = send(app, "POST", "/products", Some(&body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "missing_field");
        assert_eq!(json["message"], "missing required field: name");
    }

    #[tokio::test]
    async fn test_add_product_returns_409_for_duplicate_id() {
        // Arrange
        let state = state_with(Arc::new(EmptySnapshotRepository)).await;
        send(router().with_state(state.clone()), "POST", "/products", Some(&widget())).await;
        let impostor = json!({ "id": "sku-1", "name": "Other", "category": "Misc", "quantity": 1 });

        // Act
        let (status, json) =
            send(router().with_state(state.clone()), "POST", "/products", Some(&impostor)).await;

        // Assert
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"], "duplicate_id");
        let (_, listed) = send(router().with_state(state), "GET", "/products", None).await;
        assert_eq!(listed["products"][0]["name"], "Widget");
    }

    #[tokio::test]
    async fn test_add_product_succeeds_even_when_save_fails() {
        let app = router().with_state(state_with(Arc::new(FailingSnapshotRepository)).await);

        let (status, _) = send(app, "POST", "/products", Some(&widget())).await;

        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_list_products_returns_insertion_order() {
        // Arrange
        let state = state_with(Arc::new(EmptySnapshotRepository)).await;
        for id in ["b", "a"] {
            let body = json!({ "id": id, "name": "N", "category": "C", "quantity": 1 });
            send(router().with_state(state.clone()), "POST", "/products", Some(&body)).await;
        }

        // Act
        let (status, json) = send(router().with_state(state), "GET", "/products", None).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Products retrieved");
        let ids: Vec<&str> = json["products"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[tokio::test]
    async fn test_remove_product_returns_removed_product_and_saves() {
        // Arrange
        let repository = Arc::new(RecordingSnapshotRepository::new());
        let state = state_with(repository.clone()).await;
        send(router().with_state(state.clone()), "POST", "/products", Some(&widget())).await;

        // Act
        let (status, json) =
            send(router().with_state(state), "DELETE", "/products/sku-1", None).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Product removed");
        assert_eq!(json["product"]["id"], "sku-1");
        let saved = repository.last_saved().unwrap();
        assert!(saved.products.is_empty());
        assert_eq!(saved.history.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_product_returns_404() {
        let app = router().with_state(state_with(Arc::new(EmptySnapshotRepository)).await);

        let (status, json) = send(app, "DELETE", "/products/ghost", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "not_found");
    }
}
