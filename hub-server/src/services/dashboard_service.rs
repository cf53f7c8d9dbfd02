//! Dashboard aggregation
//!
//! Summary counters derived live from the entity stores on every request.
//! Nothing here is cached or persisted, so the numbers can never drift from
//! the underlying data.

use std::sync::Arc;

use serde::Serialize;
use shared::models::{
    InventoryItem, Order, OrderStatus, ProductionTask, Shipment, ShipmentStatus, TaskStatus,
};

use crate::store::Collection;

/// Live summary counters for the admin dashboard
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Orders submitted but not yet picked up by the back office
    pub pending_orders: usize,
    /// Production tasks that are pending or in progress
    pub open_tasks: usize,
    pub shipments_in_transit: usize,
    pub low_stock_items: usize,
}

/// Dashboard aggregation engine
#[derive(Debug)]
pub struct DashboardService {
    orders: Arc<Collection<Order>>,
    tasks: Arc<Collection<ProductionTask>>,
    shipments: Arc<Collection<Shipment>>,
    inventory: Arc<Collection<InventoryItem>>,
}

impl DashboardService {
    pub fn new(
        orders: Arc<Collection<Order>>,
        tasks: Arc<Collection<ProductionTask>>,
        shipments: Arc<Collection<Shipment>>,
        inventory: Arc<Collection<InventoryItem>>,
    ) -> Self {
        Self {
            orders,
            tasks,
            shipments,
            inventory,
        }
    }

    pub async fn stats(&self) -> DashboardStats {
        DashboardStats {
            pending_orders: self.orders.count(|o| o.status == OrderStatus::Submitted),
            open_tasks: self
                .tasks
                .count(|t| matches!(t.status, TaskStatus::Pending | TaskStatus::InProgress)),
            shipments_in_transit: self
                .shipments
                .count(|s| s.status == ShipmentStatus::InTransit),
            low_stock_items: self.inventory.count(InventoryItem::is_low_stock),
        }
    }
}
