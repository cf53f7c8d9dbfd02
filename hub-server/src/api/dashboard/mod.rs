//! Dashboard API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/dashboard", dashboard_routes())
}

fn dashboard_routes() -> Router<ServerState> {
    Router::new().route("/stats", get(handler::stats))
}
