//! Recipe catalog API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/recipes", recipe_routes())
}

fn recipe_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/by-product/{product_id}", get(handler::get_by_product))
}
