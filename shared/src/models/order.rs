//! Order Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order lifecycle status
///
/// The lifecycle is ordered but not strictly linear: production and shipment
/// engines drive orders through the middle states, `cancelled` can be reached
/// from anywhere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Submitted,
    Approved,
    Scheduled,
    InProduction,
    Produced,
    ReadyForDelivery,
    Shipping,
    Delivered,
    Completed,
    Cancelled,
}

/// Order priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderPriority {
    High,
    #[default]
    Normal,
    Low,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product reference (String ID)
    pub product_id: String,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    /// Unit price in currency unit
    pub price: f64,
}

impl OrderItem {
    /// Line total (`quantity * price`)
    pub fn line_total(&self) -> f64 {
        self.quantity * self.price
    }
}

/// Order entity
///
/// Invariants at creation time: `items_count == items.len()` and
/// `total_amount == Σ quantity * price`. Totals are not recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub store_name: String,
    /// Creation date, `YYYY-MM-DD`
    pub date: String,
    /// Total amount in currency unit
    pub total_amount: f64,
    pub status: OrderStatus,
    pub items_count: u32,
    pub priority: OrderPriority,
    pub items: Vec<OrderItem>,
}

/// Create order payload
///
/// Orders start as `submitted` directly; there is no draft flow.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[validate(length(min = 1, message = "store name is required"))]
    pub store_name: String,
    #[serde(default)]
    pub priority: OrderPriority,
    #[validate(length(min = 1, message = "order must contain at least one item"))]
    pub items: Vec<OrderItem>,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdateStatus {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProduction).unwrap(),
            "\"in_production\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::ReadyForDelivery).unwrap(),
            "\"ready_for_delivery\""
        );
        let s: OrderStatus = serde_json::from_str("\"produced\"").unwrap();
        assert_eq!(s, OrderStatus::Produced);
    }

    #[test]
    fn test_order_serialize_camel_case() {
        let order = Order {
            id: "ORD-1".into(),
            store_name: "Downtown Store".into(),
            date: "2023-10-25".into(),
            total_amount: 1250.0,
            status: OrderStatus::Submitted,
            items_count: 0,
            priority: OrderPriority::High,
            items: vec![],
        };
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"storeName\""));
        assert!(json.contains("\"totalAmount\""));
        assert!(json.contains("\"itemsCount\""));
    }

    #[test]
    fn test_create_payload_rejects_empty_items() {
        let payload = OrderCreate {
            store_name: "Downtown Store".into(),
            priority: OrderPriority::Normal,
            items: vec![],
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_payload_defaults_priority() {
        let payload: OrderCreate = serde_json::from_str(
            r#"{"storeName":"Downtown Store","items":[{"productId":"1","productName":"Beef","quantity":1,"unit":"kg","price":10}]}"#,
        )
        .unwrap();
        assert_eq!(payload.priority, OrderPriority::Normal);
        assert!(payload.validate().is_ok());
    }
}
