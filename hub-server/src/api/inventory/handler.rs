//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{InventoryItem, StockAdjust};

#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    /// `"kitchen"` or a store id; every location when absent
    pub location: Option<String>,
}

/// GET /api/inventory?location= - stock levels
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = match query.location {
        Some(location) => state.inventory.list_by_location(&location).await,
        None => state.inventory.list().await,
    };
    Ok(Json(items))
}

/// PUT /api/inventory/:id - overwrite a row's quantity
pub async fn adjust_stock(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StockAdjust>,
) -> AppResult<Json<InventoryItem>> {
    let item = state.inventory.adjust_stock(&id, payload).await?;
    Ok(Json(item))
}

/// GET /api/inventory/alerts - rows at or below their minimum stock level
pub async fn low_stock_alerts(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    Ok(Json(state.inventory.low_stock_alerts().await))
}
