//! Order lifecycle engine
//!
//! Owns the order status field. Status transitions are permissive (any status
//! may be overwritten with any other); the production and shipment engines
//! drive orders through the middle of the lifecycle by calling
//! [`OrderStatusUpdater::update_status`]. This engine never cascades on its
//! own.

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{Order, OrderCreate, OrderStatus};
use shared::{AppResult, util};
use validator::Validate;

use crate::store::Collection;

/// Capability to overwrite an order's status, used by the production sync
/// and shipment dispatch engines so they do not depend on the full
/// [`OrderService`].
#[async_trait]
pub trait OrderStatusUpdater: Send + Sync {
    async fn update_status(&self, order_id: &str, status: OrderStatus) -> AppResult<Order>;
}

/// Order lifecycle engine
#[derive(Debug)]
pub struct OrderService {
    orders: Arc<Collection<Order>>,
}

impl OrderService {
    pub fn new(orders: Arc<Collection<Order>>) -> Self {
        Self { orders }
    }

    /// All orders, most recent first.
    pub async fn list(&self) -> Vec<Order> {
        self.orders.all()
    }

    pub async fn get(&self, id: &str) -> AppResult<Order> {
        self.orders.find(id)
    }

    /// Create an order in `submitted` state.
    ///
    /// `total_amount` and `items_count` are computed from the line items
    /// here and never recomputed afterwards. An empty item list is rejected;
    /// the form layer also prevents it, but the engine fails closed rather
    /// than admitting a zero-total order.
    pub async fn create(&self, payload: OrderCreate) -> AppResult<Order> {
        payload.validate()?;

        let total_amount: f64 = payload.items.iter().map(|item| item.line_total()).sum();
        let order = Order {
            id: util::resource_id("ORD"),
            store_name: payload.store_name,
            date: util::today(),
            total_amount,
            status: OrderStatus::Submitted,
            items_count: payload.items.len() as u32,
            priority: payload.priority,
            items: payload.items,
        };

        tracing::info!(
            order_id = %order.id,
            store = %order.store_name,
            total = order.total_amount,
            items = order.items_count,
            "Order created"
        );
        self.orders.insert_front(order.clone());
        Ok(order)
    }

    /// Overwrite the order status.
    ///
    /// No transition-graph check is applied; see the status-transition note
    /// in DESIGN.md.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let order = self.orders.update(id, |o| o.status = status)?;
        tracing::info!(order_id = %id, status = ?status, "Order status updated");
        Ok(order)
    }

    /// Orders matching exactly the given status, most recent first.
    pub async fn list_by_status(&self, status: OrderStatus) -> Vec<Order> {
        self.orders.filter(|o| o.status == status)
    }
}

#[async_trait]
impl OrderStatusUpdater for OrderService {
    async fn update_status(&self, order_id: &str, status: OrderStatus) -> AppResult<Order> {
        OrderService::update_status(self, order_id, status).await
    }
}
