//! Entity stores - in-memory collections with lookup, insert and update
//!
//! # Modules
//!
//! - [`Collection`] - generic id-keyed collection with per-store locking
//! - [`Keyed`] - trait for entities that expose their id

pub mod collection;

pub use collection::{Collection, Keyed};

use shared::models::{
    Invoice, InventoryItem, Material, Order, Product, ProductionTask, Recipe, Shipment, Store,
};

impl Keyed for Order {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for ProductionTask {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Shipment {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Invoice {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for InventoryItem {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Store {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Product {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Material {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Recipe {
    fn key(&self) -> &str {
        &self.id
    }
}
