//! Server State
//!
//! Holds shared references to every entity store and engine. Cloning is a
//! shallow Arc copy, so handlers and tests can pass the state around freely.

use std::sync::Arc;

use shared::AppError;
use shared::models::{
    InventoryItem, Invoice, Material, Order, Product, ProductionTask, Recipe, Shipment, Store,
};

use crate::core::Config;
use crate::services::{
    BillingService, CatalogService, DashboardService, InventoryService, KitchenService,
    OrderService, ShipmentService, seed,
};
use crate::store::Collection;

/// Shared server state
///
/// | Field | Description |
/// |-------|-------------|
/// | config | immutable configuration |
/// | orders | order lifecycle engine |
/// | kitchen | production sync engine |
/// | shipments | shipment dispatch engine |
/// | inventory | stock tracking engine |
/// | billing | invoice billing engine |
/// | dashboard | live counters over the stores |
/// | catalog | read-only reference data |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub orders: Arc<OrderService>,
    pub kitchen: Arc<KitchenService>,
    pub shipments: Arc<ShipmentService>,
    pub inventory: Arc<InventoryService>,
    pub billing: Arc<BillingService>,
    pub dashboard: Arc<DashboardService>,
    pub catalog: Arc<CatalogService>,
}

impl ServerState {
    /// Build all stores and engines. Loads the demo dataset when the
    /// configuration asks for it.
    pub async fn initialize(config: &Config) -> Self {
        let orders = Arc::new(Collection::<Order>::new("order", |id| {
            AppError::order_not_found(id)
        }));
        let tasks = Arc::new(Collection::<ProductionTask>::new("production_task", |id| {
            AppError::task_not_found(id)
        }));
        let shipments = Arc::new(Collection::<Shipment>::new("shipment", |id| {
            AppError::shipment_not_found(id)
        }));
        let inventory = Arc::new(Collection::<InventoryItem>::new("inventory_item", |id| {
            AppError::inventory_item_not_found(id)
        }));
        let invoices = Arc::new(Collection::<Invoice>::new("invoice", |id| {
            AppError::invoice_not_found(id)
        }));
        let stores = Arc::new(Collection::<Store>::new("store", |id| {
            AppError::store_not_found(id)
        }));
        let products = Arc::new(Collection::<Product>::new("product", |id| {
            AppError::product_not_found(id)
        }));
        let materials = Arc::new(Collection::<Material>::new("material", |id| {
            AppError::material_not_found(id)
        }));
        let recipes = Arc::new(Collection::<Recipe>::new("recipe", |id| {
            AppError::recipe_not_found(id)
        }));

        if config.seed_demo_data {
            seed::load(
                &orders,
                &tasks,
                &shipments,
                &inventory,
                &invoices,
                seed::CatalogCollections {
                    stores: &stores,
                    products: &products,
                    materials: &materials,
                    recipes: &recipes,
                },
            );
        }

        let order_service = Arc::new(OrderService::new(orders.clone()));
        let kitchen = Arc::new(KitchenService::new(tasks.clone(), order_service.clone()));
        let shipment_service = Arc::new(ShipmentService::new(
            shipments.clone(),
            order_service.clone(),
        ));
        let inventory_service = Arc::new(InventoryService::new(inventory.clone()));
        let billing = Arc::new(BillingService::new(invoices));
        let dashboard = Arc::new(DashboardService::new(orders, tasks, shipments, inventory));
        let catalog = Arc::new(CatalogService::new(stores, products, materials, recipes));

        tracing::info!(environment = %config.environment, "Server state initialized");

        Self {
            config: Arc::new(config.clone()),
            orders: order_service,
            kitchen,
            shipments: shipment_service,
            inventory: inventory_service,
            billing,
            dashboard,
            catalog,
        }
    }
}
