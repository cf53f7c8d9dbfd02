//! Dashboard API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::services::DashboardStats;
use shared::AppResult;

/// GET /api/dashboard/stats - live counters over the entity stores
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    Ok(Json(state.dashboard.stats().await))
}
