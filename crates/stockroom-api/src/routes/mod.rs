//! Route modules, one per resource.

pub mod health;
pub mod history;
pub mod products;
pub mod stock;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use stockroom_core::repository::SnapshotRepository;
    use stockroom_inventory::application::store::InventoryStore;
    use stockroom_test_support::FixedClock;
    use tower::ServiceExt;

    use crate::state::AppState;

    /// Builds state around a fresh store backed by `repository`.
    pub(crate) async fn state_with(repository: Arc<dyn SnapshotRepository>) -> AppState {
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        AppState::new(InventoryStore::open(clock, repository).await)
    }

    /// Sends one request and decodes the JSON response body.
    pub(crate) async fn send(
        app: Router,
        method: &str,
        uri: &str,
        body: Option<&Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}
