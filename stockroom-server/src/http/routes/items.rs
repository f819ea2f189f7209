//! Item endpoints
//!
//! Item reads are enriched with the supplier's name via the repository's
//! LEFT JOIN; the embedded supplier is serialized as `{"name": <text|null>}`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::db::repos::{ItemRepo, ItemWithSupplier, NewItem};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::ListParams;

/// Create/replace item request (full field set, no partial patch)
#[derive(Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub supplier_id: i64,
}

impl From<ItemPayload> for NewItem {
    fn from(p: ItemPayload) -> Self {
        Self {
            name: p.name,
            category: p.category,
            quantity: p.quantity,
            price: p.price,
            supplier_id: p.supplier_id,
        }
    }
}

/// Embedded supplier reference
#[derive(Serialize)]
pub struct SupplierRef {
    pub name: Option<String>,
}

/// Item response with embedded supplier name
#[derive(Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub supplier_id: i64,
    pub supplier: SupplierRef,
}

impl From<ItemWithSupplier> for ItemResponse {
    fn from(i: ItemWithSupplier) -> Self {
        Self {
            id: i.id,
            name: i.name,
            category: i.category,
            quantity: i.quantity,
            price: i.price,
            supplier_id: i.supplier_id,
            supplier: SupplierRef {
                name: i.supplier_name,
            },
        }
    }
}

/// POST /items/ - create a new item
async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ItemPayload>,
) -> Result<Json<ItemResponse>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let item = ItemRepo::new(&mut conn).create(req.into()).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// GET /items/ - list items with a skip/limit window
async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let items = ItemRepo::new(&mut conn)
        .list(params.skip(), params.limit())
        .await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// GET /items/{id} - get a single item
async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let item = ItemRepo::new(&mut conn).get(id).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// PUT /items/{id} - replace every field of an item
async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<ItemPayload>,
) -> Result<Json<ItemResponse>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let item = ItemRepo::new(&mut conn).update(id, req.into()).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// DELETE /items/{id} - delete an item
async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    ItemRepo::new(&mut conn).delete(id).await?;
    Ok(Json(json!({ "message": "Item deleted" })))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
