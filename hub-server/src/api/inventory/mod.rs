//! Inventory API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/inventory", inventory_routes())
}

fn inventory_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/alerts", get(handler::low_stock_alerts))
        .route("/{id}", put(handler::adjust_stock))
}
