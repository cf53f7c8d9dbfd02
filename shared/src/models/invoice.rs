//! Invoice Model
//!
//! Peripheral to the order lifecycle: invoices have no automatic linkage to
//! orders or shipments.

use serde::{Deserialize, Serialize};

/// Invoice status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
    Cancelled,
}

/// Invoice line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub price: f64,
}

/// Invoice entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub store_name: String,
    /// Amount in currency unit
    pub amount: f64,
    pub status: InvoiceStatus,
    /// Issue date, `YYYY-MM-DD`
    pub date: String,
    /// Due date, `YYYY-MM-DD`
    pub due_date: String,
    pub items: Vec<InvoiceItem>,
}

/// Update invoice status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceUpdateStatus {
    pub status: InvoiceStatus,
}
