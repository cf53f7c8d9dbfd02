//! Business engines
//!
//! Each engine owns one entity collection; cross-engine effects (production
//! sync, shipment cascades) go through the [`OrderStatusUpdater`] capability
//! rather than a direct dependency on the order engine.

pub mod billing_service;
pub mod catalog_service;
pub mod dashboard_service;
pub mod inventory_service;
pub mod kitchen_service;
pub mod order_service;
pub mod seed;
pub mod shipment_service;

pub use billing_service::BillingService;
pub use catalog_service::CatalogService;
pub use dashboard_service::{DashboardService, DashboardStats};
pub use inventory_service::InventoryService;
pub use kitchen_service::KitchenService;
pub use order_service::{OrderService, OrderStatusUpdater};
pub use shipment_service::ShipmentService;
