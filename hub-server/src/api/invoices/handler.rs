//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{Invoice, InvoiceUpdateStatus};

/// GET /api/invoices - all invoices
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Invoice>>> {
    Ok(Json(state.billing.list().await))
}

/// PUT /api/invoices/:id/status - overwrite the invoice status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InvoiceUpdateStatus>,
) -> AppResult<Json<Invoice>> {
    let invoice = state.billing.update_status(&id, payload.status).await?;
    Ok(Json(invoice))
}
