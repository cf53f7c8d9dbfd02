//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{Order, OrderCreate, OrderStatus, OrderUpdateStatus};

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    /// Exact status filter, all orders when absent
    pub status: Option<OrderStatus>,
}

/// GET /api/orders?status= - all orders, most recent first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = match query.status {
        Some(status) => state.orders.list_by_status(status).await,
        None => state.orders.list().await,
    };
    Ok(Json(orders))
}

/// GET /api/orders/:id - single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.orders.get(&id).await?;
    Ok(Json(order))
}

/// POST /api/orders - create an order in `submitted` state
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = state.orders.create(payload).await?;
    Ok(Json(order))
}

/// PUT /api/orders/:id/status - overwrite the order status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdateStatus>,
) -> AppResult<Json<Order>> {
    let order = state.orders.update_status(&id, payload.status).await?;
    Ok(Json(order))
}
