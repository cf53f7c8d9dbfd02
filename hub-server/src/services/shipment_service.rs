//! Shipment dispatch engine
//!
//! Batches orders ready for delivery into a shipment and keeps shipment and
//! order status mutually consistent. Dispatch eligibility (orders in
//! `produced`) is the caller's responsibility; the engine performs no check.
//!
//! Cascades onto linked orders are sequential and non-atomic: if the update
//! of order k fails, orders before k stay updated and orders after k are
//! untouched. The partial state is observable and logged; no rollback is
//! attempted.

use std::sync::Arc;

use shared::models::{
    OrderStatus, Shipment, ShipmentCreate, ShipmentStatus, ShipmentUpdateStatus, TrackingUpdate,
};
use shared::{AppResult, util};

use crate::services::OrderStatusUpdater;
use crate::store::Collection;

/// All outbound shipments leave from the central kitchen.
const ORIGIN: &str = "Central Kitchen";
/// ETA offset for new shipments.
const ETA_DAYS: i64 = 1;

/// Shipment dispatch engine
pub struct ShipmentService {
    shipments: Arc<Collection<Shipment>>,
    orders: Arc<dyn OrderStatusUpdater>,
}

impl ShipmentService {
    pub fn new(
        shipments: Arc<Collection<Shipment>>,
        orders: Arc<dyn OrderStatusUpdater>,
    ) -> Self {
        Self { shipments, orders }
    }

    /// All shipments, most recent first.
    pub async fn list(&self) -> Vec<Shipment> {
        self.shipments.all()
    }

    pub async fn get(&self, id: &str) -> AppResult<Shipment> {
        self.shipments.find(id)
    }

    /// Create a shipment for a batch of orders and move every linked order
    /// to `shipping`.
    pub async fn create(&self, payload: ShipmentCreate) -> AppResult<Shipment> {
        let shipment = Shipment {
            id: util::resource_id("SHP"),
            order_ids: payload.order_ids,
            origin: ORIGIN.to_string(),
            destination: payload.destination,
            status: ShipmentStatus::Scheduled,
            eta: util::datetime_in_days(ETA_DAYS),
            driver: payload.driver,
            vehicle: payload.vehicle,
            updates: vec![TrackingUpdate {
                timestamp: util::now_datetime(),
                location: ORIGIN.to_string(),
                details: "Shipment created".to_string(),
                status: ShipmentStatus::Scheduled,
            }],
        };
        self.shipments.insert_front(shipment.clone());
        tracing::info!(
            shipment_id = %shipment.id,
            orders = shipment.order_ids.len(),
            destination = %shipment.destination,
            "Shipment created"
        );

        self.cascade_orders(&shipment.id, &shipment.order_ids, OrderStatus::Shipping)
            .await?;
        Ok(shipment)
    }

    /// Overwrite the shipment status and prepend a tracking update.
    ///
    /// On `delivered`, every linked order is moved to `delivered`.
    pub async fn update_status(
        &self,
        id: &str,
        payload: ShipmentUpdateStatus,
    ) -> AppResult<Shipment> {
        let status = payload.status;
        let entry = TrackingUpdate {
            timestamp: util::now_datetime(),
            location: payload.location.unwrap_or_else(|| "In Transit".to_string()),
            details: payload.details.unwrap_or_else(|| "Status updated".to_string()),
            status,
        };

        let shipment = self.shipments.update(id, |s| {
            s.status = status;
            s.updates.insert(0, entry);
        })?;
        tracing::info!(shipment_id = %id, status = ?status, "Shipment status updated");

        if status == ShipmentStatus::Delivered {
            self.cascade_orders(id, &shipment.order_ids, OrderStatus::Delivered)
                .await?;
        }
        Ok(shipment)
    }

    /// Sequentially push `status` onto every linked order. The first failure
    /// aborts the loop and is returned to the caller; earlier orders keep
    /// their new status.
    async fn cascade_orders(
        &self,
        shipment_id: &str,
        order_ids: &[String],
        status: OrderStatus,
    ) -> AppResult<()> {
        for order_id in order_ids {
            if let Err(err) = self.orders.update_status(order_id, status).await {
                tracing::warn!(
                    shipment_id,
                    order_id = %order_id,
                    error = %err,
                    "Order cascade failed partway, earlier orders remain updated"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ShipmentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShipmentService")
            .field("shipments", &self.shipments)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::OrderService;
    use shared::ErrorCode;
    use shared::models::{OrderCreate, OrderItem, OrderPriority};

    async fn setup() -> (ShipmentService, Arc<OrderService>) {
        let orders = Arc::new(OrderService::new(Arc::new(Collection::new(
            "order",
            |id| shared::AppError::order_not_found(id),
        ))));
        let shipments = Arc::new(Collection::new("shipment", |id| {
            shared::AppError::shipment_not_found(id)
        }));
        (ShipmentService::new(shipments, orders.clone()), orders)
    }

    async fn produced_order(orders: &OrderService) -> String {
        let order = orders
            .create(OrderCreate {
                store_name: "Downtown Store".into(),
                priority: OrderPriority::Normal,
                items: vec![OrderItem {
                    product_id: "1".into(),
                    product_name: "Beef".into(),
                    quantity: 1.0,
                    unit: "kg".into(),
                    price: 10.0,
                }],
            })
            .await
            .unwrap();
        orders
            .update_status(&order.id, OrderStatus::Produced)
            .await
            .unwrap();
        order.id
    }

    fn dispatch(order_ids: Vec<String>) -> ShipmentCreate {
        ShipmentCreate {
            order_ids,
            driver: "Mike T.".into(),
            vehicle: "Truck-01".into(),
            destination: "Downtown Store".into(),
        }
    }

    #[tokio::test]
    async fn test_create_defaults_and_seed_update() {
        let (svc, orders) = setup().await;
        let o1 = produced_order(&orders).await;

        let shipment = svc.create(dispatch(vec![o1])).await.unwrap();
        assert_eq!(shipment.origin, "Central Kitchen");
        assert_eq!(shipment.status, ShipmentStatus::Scheduled);
        assert_eq!(shipment.updates.len(), 1);
        assert_eq!(shipment.updates[0].details, "Shipment created");
        assert_eq!(shipment.updates[0].status, ShipmentStatus::Scheduled);
        assert!(shipment.id.starts_with("SHP-"));
    }

    #[tokio::test]
    async fn test_create_moves_all_orders_to_shipping() {
        let (svc, orders) = setup().await;
        let o1 = produced_order(&orders).await;
        let o2 = produced_order(&orders).await;

        svc.create(dispatch(vec![o1.clone(), o2.clone()])).await.unwrap();
        assert_eq!(orders.get(&o1).await.unwrap().status, OrderStatus::Shipping);
        assert_eq!(orders.get(&o2).await.unwrap().status, OrderStatus::Shipping);
    }

    #[tokio::test]
    async fn test_delivery_cascades_to_orders() {
        let (svc, orders) = setup().await;
        let o1 = produced_order(&orders).await;
        let o2 = produced_order(&orders).await;
        let shipment = svc.create(dispatch(vec![o1.clone(), o2.clone()])).await.unwrap();

        svc.update_status(
            &shipment.id,
            ShipmentUpdateStatus {
                status: ShipmentStatus::Delivered,
                location: Some("Downtown Store".into()),
                details: Some("Arrived at destination".into()),
            },
        )
        .await
        .unwrap();

        assert_eq!(orders.get(&o1).await.unwrap().status, OrderStatus::Delivered);
        assert_eq!(orders.get(&o2).await.unwrap().status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn test_non_delivery_update_does_not_cascade() {
        let (svc, orders) = setup().await;
        let o1 = produced_order(&orders).await;
        let shipment = svc.create(dispatch(vec![o1.clone()])).await.unwrap();

        svc.update_status(
            &shipment.id,
            ShipmentUpdateStatus {
                status: ShipmentStatus::InTransit,
                location: None,
                details: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(orders.get(&o1).await.unwrap().status, OrderStatus::Shipping);
    }

    #[tokio::test]
    async fn test_tracking_updates_newest_first() {
        let (svc, orders) = setup().await;
        let o1 = produced_order(&orders).await;
        let shipment = svc.create(dispatch(vec![o1])).await.unwrap();

        svc.update_status(
            &shipment.id,
            ShipmentUpdateStatus {
                status: ShipmentStatus::InTransit,
                location: Some("Highway 405".into()),
                details: Some("Departed from origin".into()),
            },
        )
        .await
        .unwrap();
        let after = svc
            .update_status(
                &shipment.id,
                ShipmentUpdateStatus {
                    status: ShipmentStatus::Delayed,
                    location: None,
                    details: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(after.updates.len(), 3);
        assert_eq!(after.updates[0].status, ShipmentStatus::Delayed);
        assert_eq!(after.updates[0].location, "In Transit");
        assert_eq!(after.updates[0].details, "Status updated");
        assert_eq!(after.updates[1].status, ShipmentStatus::InTransit);
        assert_eq!(after.updates[1].location, "Highway 405");
        assert_eq!(after.updates[2].details, "Shipment created");
    }

    #[tokio::test]
    async fn test_partial_cascade_leaves_mixed_state() {
        let (svc, orders) = setup().await;
        let o1 = produced_order(&orders).await;

        // Second id does not exist: o1 is updated, the call reports the failure
        let err = svc
            .create(dispatch(vec![o1.clone(), "ORD-0".into()]))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
        assert_eq!(orders.get(&o1).await.unwrap().status, OrderStatus::Shipping);
        // The shipment itself was created before the cascade
        assert_eq!(svc.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_shipment_id() {
        let (svc, _orders) = setup().await;
        let err = svc
            .update_status(
                "SHP-0",
                ShipmentUpdateStatus {
                    status: ShipmentStatus::Delivered,
                    location: None,
                    details: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ShipmentNotFound);
    }
}
