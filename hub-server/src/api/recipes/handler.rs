//! Recipe catalog API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::Recipe;

/// GET /api/recipes - all recipes
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Recipe>>> {
    Ok(Json(state.catalog.recipes().await))
}

/// GET /api/recipes/by-product/:product_id - the recipe producing a product
pub async fn get_by_product(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<Recipe>> {
    let recipe = state.catalog.recipe_for_product(&product_id).await?;
    Ok(Json(recipe))
}
