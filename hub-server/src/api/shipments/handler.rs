//! Shipment API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{Shipment, ShipmentCreate, ShipmentUpdateStatus};

/// GET /api/shipments - all shipments, most recent first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Shipment>>> {
    Ok(Json(state.shipments.list().await))
}

/// GET /api/shipments/:id - single shipment with its tracking history
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Shipment>> {
    let shipment = state.shipments.get(&id).await?;
    Ok(Json(shipment))
}

/// POST /api/shipments - dispatch a batch of orders
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ShipmentCreate>,
) -> AppResult<Json<Shipment>> {
    let shipment = state.shipments.create(payload).await?;
    Ok(Json(shipment))
}

/// PUT /api/shipments/:id/status - update status and append a tracking entry
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ShipmentUpdateStatus>,
) -> AppResult<Json<Shipment>> {
    let shipment = state.shipments.update_status(&id, payload).await?;
    Ok(Json(shipment))
}
