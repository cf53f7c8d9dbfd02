//! Domain models for the franchise hub
//!
//! Wire format matches the admin frontend: camelCase field names,
//! lowercase snake_case status values.

pub mod catalog;
pub mod inventory;
pub mod invoice;
pub mod order;
pub mod production_task;
pub mod shipment;

pub use catalog::{
    Material, MaterialStatus, Product, ProductStatus, Recipe, RecipeItem, Store,
    StoreInventoryStatus, StoreStatus,
};
pub use inventory::{InventoryItem, InventoryItemType, StockAdjust};
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus, InvoiceUpdateStatus};
pub use order::{Order, OrderCreate, OrderItem, OrderPriority, OrderStatus, OrderUpdateStatus};
pub use production_task::{ProductionTask, TaskCreate, TaskSpec, TaskStatus, TaskUpdateStatus};
pub use shipment::{Shipment, ShipmentCreate, ShipmentStatus, ShipmentUpdateStatus, TrackingUpdate};
