//! Kitchen API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/kitchen", kitchen_routes())
}

fn kitchen_routes() -> Router<ServerState> {
    Router::new()
        .route("/tasks", get(handler::schedule).post(handler::create_task))
        .route(
            "/tasks/from-order/{order_id}",
            post(handler::create_tasks_from_order),
        )
        .route("/tasks/{id}/status", put(handler::update_task_status))
}
