//! Stock tracking engine
//!
//! Inventory rows live per location (`"kitchen"` or a store id). Adjustments
//! overwrite the quantity outright; there is no delta arithmetic and no
//! negative-quantity guard. Low stock is a read-time predicate, never stored.

use std::sync::Arc;

use shared::models::{InventoryItem, StockAdjust};
use shared::{AppResult, util};

use crate::store::Collection;

/// Stock tracking engine
#[derive(Debug)]
pub struct InventoryService {
    items: Arc<Collection<InventoryItem>>,
}

impl InventoryService {
    pub fn new(items: Arc<Collection<InventoryItem>>) -> Self {
        Self { items }
    }

    /// Rows at one location, exact id match.
    pub async fn list_by_location(&self, location_id: &str) -> Vec<InventoryItem> {
        self.items.filter(|i| i.location_id == location_id)
    }

    pub async fn list(&self) -> Vec<InventoryItem> {
        self.items.all()
    }

    /// Overwrite the quantity of a row and stamp `last_updated` with today.
    ///
    /// The adjustment reason is logged for the audit trail but not persisted.
    pub async fn adjust_stock(&self, id: &str, payload: StockAdjust) -> AppResult<InventoryItem> {
        let today = util::today();
        let item = self.items.update(id, |i| {
            i.quantity = payload.quantity;
            i.last_updated = today;
        })?;
        tracing::info!(
            item_id = %id,
            item = %item.item_name,
            quantity = item.quantity,
            reason = %payload.reason,
            "Stock adjusted"
        );
        Ok(item)
    }

    /// Every row at or below its minimum stock level, across all locations.
    pub async fn low_stock_alerts(&self) -> Vec<InventoryItem> {
        self.items.filter(InventoryItem::is_low_stock)
    }

    /// Number of low-stock rows, for the dashboard.
    pub async fn low_stock_count(&self) -> usize {
        self.items.count(InventoryItem::is_low_stock)
    }
}
