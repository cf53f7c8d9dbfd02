//! Store catalog API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::Store;

/// GET /api/stores - all franchise stores
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Store>>> {
    Ok(Json(state.catalog.stores().await))
}

/// GET /api/stores/:id - one store
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Store>> {
    let store = state.catalog.store(&id).await?;
    Ok(Json(store))
}
