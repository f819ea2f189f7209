//! Supplier endpoints
//!
//! Suppliers are create-only over HTTP: there is no list, update, or
//! delete for them.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{NewSupplier, Supplier, SupplierRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create supplier request
#[derive(Deserialize)]
pub struct CreateSupplierRequest {
    pub name: String,
    pub contact: String,
}

/// Supplier response
#[derive(Serialize)]
pub struct SupplierResponse {
    pub id: i64,
    pub name: String,
    pub contact: String,
}

impl From<Supplier> for SupplierResponse {
    fn from(s: Supplier) -> Self {
        Self {
            id: s.id,
            name: s.name,
            contact: s.contact,
        }
    }
}

/// POST /suppliers/ - create a new supplier
async fn create_supplier(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSupplierRequest>,
) -> Result<Json<SupplierResponse>, ApiError> {
    let mut conn = state.pool.acquire().await?;

    let supplier = SupplierRepo::new(&mut conn)
        .create(NewSupplier {
            name: req.name,
            contact: req.contact,
        })
        .await?;

    Ok(Json(SupplierResponse::from(supplier)))
}

/// Supplier routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/suppliers/", post(create_supplier))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    use crate::http::server::{build_router, AppState};

    async fn test_app() -> Router {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("pool");
        crate::db::migrations::run(&pool).await.expect("schema");
        build_router(AppState { pool })
    }

    #[tokio::test]
    async fn create_supplier_returns_persisted_record() {
        let app = test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/suppliers/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "name": "Acme", "contact": "a@x.com" }).to_string(),
            ))
            .expect("request");

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(body, json!({ "id": 1, "name": "Acme", "contact": "a@x.com" }));
    }

    #[tokio::test]
    async fn create_supplier_rejects_missing_fields() {
        let app = test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/suppliers/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "name": "Acme" }).to_string()))
            .expect("request");

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
