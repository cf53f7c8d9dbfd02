//! Material catalog API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::Material;

/// GET /api/materials - all raw materials
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Material>>> {
    Ok(Json(state.catalog.materials().await))
}

/// GET /api/materials/:id - one material
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Material>> {
    let material = state.catalog.material(&id).await?;
    Ok(Json(material))
}
