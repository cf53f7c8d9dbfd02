//! Kitchen API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{ProductionTask, TaskCreate, TaskSpec, TaskUpdateStatus};

/// GET /api/kitchen/tasks - the full production schedule
pub async fn schedule(State(state): State<ServerState>) -> AppResult<Json<Vec<ProductionTask>>> {
    Ok(Json(state.kitchen.schedule().await))
}

/// POST /api/kitchen/tasks - create a standalone task (forced pending)
pub async fn create_task(
    State(state): State<ServerState>,
    Json(payload): Json<TaskCreate>,
) -> AppResult<Json<ProductionTask>> {
    let task = state.kitchen.create_task(payload).await?;
    Ok(Json(task))
}

/// POST /api/kitchen/tasks/from-order/:order_id - bulk-create tasks from an order
pub async fn create_tasks_from_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
    Json(items): Json<Vec<TaskSpec>>,
) -> AppResult<Json<Vec<ProductionTask>>> {
    let tasks = state.kitchen.create_tasks_from_order(&order_id, items).await?;
    Ok(Json(tasks))
}

/// PUT /api/kitchen/tasks/:id/status - update a task and sync its order
pub async fn update_task_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TaskUpdateStatus>,
) -> AppResult<Json<ProductionTask>> {
    let task = state.kitchen.update_task_status(&id, payload.status).await?;
    Ok(Json(task))
}
