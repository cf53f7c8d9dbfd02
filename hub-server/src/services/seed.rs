//! Demo dataset
//!
//! Loaded at startup in development mode so list endpoints are non-empty
//! out of the box. Ids here use fixed suffixes so they never collide with
//! generated ids.

use std::sync::Arc;

use shared::models::{
    InventoryItem, InventoryItemType, Invoice, InvoiceItem, InvoiceStatus, Material,
    MaterialStatus, Order, OrderItem, OrderPriority, OrderStatus, Product, ProductStatus,
    ProductionTask, Recipe, RecipeItem, Shipment, ShipmentStatus, Store, StoreInventoryStatus,
    StoreStatus, TaskStatus, TrackingUpdate,
};

use crate::store::Collection;

pub struct CatalogCollections<'a> {
    pub stores: &'a Arc<Collection<Store>>,
    pub products: &'a Arc<Collection<Product>>,
    pub materials: &'a Arc<Collection<Material>>,
    pub recipes: &'a Arc<Collection<Recipe>>,
}

pub fn load(
    orders: &Arc<Collection<Order>>,
    tasks: &Arc<Collection<ProductionTask>>,
    shipments: &Arc<Collection<Shipment>>,
    inventory: &Arc<Collection<InventoryItem>>,
    invoices: &Arc<Collection<Invoice>>,
    catalog: CatalogCollections<'_>,
) {
    for order in demo_orders() {
        orders.push(order);
    }
    for task in demo_tasks() {
        tasks.push(task);
    }
    for shipment in demo_shipments() {
        shipments.push(shipment);
    }
    for item in demo_inventory() {
        inventory.push(item);
    }
    for invoice in demo_invoices() {
        invoices.push(invoice);
    }
    for store in demo_stores() {
        catalog.stores.push(store);
    }
    for product in demo_products() {
        catalog.products.push(product);
    }
    for material in demo_materials() {
        catalog.materials.push(material);
    }
    for recipe in demo_recipes() {
        catalog.recipes.push(recipe);
    }
    tracing::info!("Demo dataset loaded");
}

fn demo_orders() -> Vec<Order> {
    vec![Order {
        id: "ORD-001".into(),
        store_name: "Downtown Store".into(),
        date: "2023-10-25".into(),
        total_amount: 2_100_000.0,
        status: OrderStatus::Submitted,
        items_count: 2,
        priority: OrderPriority::High,
        items: vec![
            OrderItem {
                product_id: "1".into(),
                product_name: "Bê bò bistech đặc biệt".into(),
                quantity: 10.0,
                unit: "portion".into(),
                price: 150_000.0,
            },
            OrderItem {
                product_id: "2".into(),
                product_name: "Sốt tiêu đen".into(),
                quantity: 5.0,
                unit: "lit".into(),
                price: 120_000.0,
            },
        ],
    }]
}

fn demo_tasks() -> Vec<ProductionTask> {
    vec![
        ProductionTask {
            id: "TASK-001".into(),
            order_id: Some("ORD-001".into()),
            product_name: "Bê bò bistech đặc biệt".into(),
            quantity: 50.0,
            unit: "portion".into(),
            due_date: "2026-02-06".into(),
            due_time: Some("10:00".into()),
            status: TaskStatus::InProgress,
            assigned_to: "Bếp Trưởng".into(),
        },
        ProductionTask {
            id: "TASK-002".into(),
            order_id: Some("ORD-001".into()),
            product_name: "Sốt tiêu đen".into(),
            quantity: 10.0,
            unit: "lit".into(),
            due_date: "2026-02-07".into(),
            due_time: Some("14:30".into()),
            status: TaskStatus::Pending,
            assigned_to: "Phụ Bếp A".into(),
        },
        ProductionTask {
            id: "TASK-003".into(),
            order_id: None,
            product_name: "Khoai tây cắt sợi".into(),
            quantity: 50.0,
            unit: "kg".into(),
            due_date: "2026-02-05".into(),
            due_time: None,
            status: TaskStatus::Completed,
            assigned_to: "Phụ Bếp B".into(),
        },
        ProductionTask {
            id: "TASK-004".into(),
            order_id: None,
            product_name: "Salad Dressing".into(),
            quantity: 5.0,
            unit: "lit".into(),
            due_date: "2026-02-08".into(),
            due_time: Some("09:00".into()),
            status: TaskStatus::Pending,
            assigned_to: "Bếp Lạnh".into(),
        },
    ]
}

fn demo_shipments() -> Vec<Shipment> {
    fn update(timestamp: &str, location: &str, details: &str, status: ShipmentStatus) -> TrackingUpdate {
        TrackingUpdate {
            timestamp: timestamp.into(),
            location: location.into(),
            details: details.into(),
            status,
        }
    }

    vec![
        Shipment {
            id: "SHP-8842".into(),
            order_ids: vec![],
            origin: "Central Kitchen".into(),
            destination: "Downtown Store".into(),
            status: ShipmentStatus::InTransit,
            eta: "2023-10-25 14:30".into(),
            driver: "Mike T.".into(),
            vehicle: "Truck-01".into(),
            updates: vec![
                update("2023-10-25 10:45", "Highway 405", "En route, on schedule", ShipmentStatus::InTransit),
                update("2023-10-25 09:30", "Central Kitchen", "Departed from origin", ShipmentStatus::InTransit),
                update("2023-10-25 09:15", "Central Kitchen", "Loaded onto vehicle Truck-01", ShipmentStatus::Scheduled),
                update("2023-10-25 08:00", "Central Kitchen", "Shipment created and scheduled", ShipmentStatus::Scheduled),
            ],
        },
        Shipment {
            id: "SHP-9921".into(),
            order_ids: vec![],
            origin: "Central Kitchen".into(),
            destination: "Brooklyn Hub".into(),
            status: ShipmentStatus::Delivered,
            eta: "2023-10-24 10:15".into(),
            driver: "John D.".into(),
            vehicle: "Van-05".into(),
            updates: vec![
                update("2023-10-24 10:15", "Brooklyn Hub", "Arrived at destination", ShipmentStatus::Delivered),
                update("2023-10-24 08:30", "Central Kitchen", "Departed", ShipmentStatus::InTransit),
                update("2023-10-24 07:00", "Central Kitchen", "Shipment scheduled", ShipmentStatus::Scheduled),
            ],
        },
        Shipment {
            id: "SHP-7735".into(),
            order_ids: vec![],
            origin: "Central Kitchen".into(),
            destination: "Queens Outlet".into(),
            status: ShipmentStatus::Scheduled,
            eta: "2023-10-26 09:00".into(),
            driver: "Sarah L.".into(),
            vehicle: "Truck-02".into(),
            updates: vec![update(
                "2023-10-25 14:00",
                "Central Kitchen",
                "Order processing complete, scheduled for pickup",
                ShipmentStatus::Scheduled,
            )],
        },
        Shipment {
            id: "SHP-6529".into(),
            order_ids: vec![],
            origin: "Supplier A".into(),
            destination: "Central Kitchen".into(),
            status: ShipmentStatus::Delayed,
            eta: "2023-10-25 18:00".into(),
            driver: "FedEx".into(),
            vehicle: "-".into(),
            updates: vec![
                update("2023-10-25 09:00", "Distributor Center", "Delay reported due to traffic", ShipmentStatus::Delayed),
                update("2023-10-24 16:00", "Supplier A", "Package ready for pickup", ShipmentStatus::Scheduled),
            ],
        },
    ]
}

fn demo_inventory() -> Vec<InventoryItem> {
    fn item(
        id: &str,
        item_id: &str,
        name: &str,
        item_type: InventoryItemType,
        location: &str,
        quantity: f64,
        unit: &str,
        min: f64,
        updated: &str,
    ) -> InventoryItem {
        InventoryItem {
            id: id.into(),
            item_id: item_id.into(),
            item_name: name.into(),
            item_type,
            location_id: location.into(),
            quantity,
            unit: unit.into(),
            min_stock_level: min,
            last_updated: updated.into(),
        }
    }

    use InventoryItemType::{Material, Product};
    vec![
        item("INV-001", "1", "Raw Beef Sirloin", Material, "kitchen", 120.0, "kg", 50.0, "2023-10-26"),
        item("INV-002", "2", "Black Pepper", Material, "kitchen", 18.0, "kg", 5.0, "2023-10-25"),
        item("INV-003", "1", "Signature Coffee Blend", Product, "1", 45.0, "bags", 10.0, "2023-10-26"),
        item("INV-004", "4", "Ceramic Mug", Product, "1", 12.0, "pcs", 5.0, "2023-10-20"),
        item("INV-005", "1", "Signature Coffee Blend", Product, "2", 20.0, "bags", 10.0, "2023-10-26"),
    ]
}

fn demo_invoices() -> Vec<Invoice> {
    fn line(description: &str, price: f64) -> InvoiceItem {
        InvoiceItem {
            description: description.into(),
            quantity: 1.0,
            price,
        }
    }

    vec![
        Invoice {
            id: "INV-2024-001".into(),
            store_name: "Downtown Coffee".into(),
            amount: 5000.0,
            status: InvoiceStatus::Paid,
            date: "2024-01-15".into(),
            due_date: "2024-01-30".into(),
            items: vec![
                line("Franchise Fee (Jan)", 2000.0),
                line("Royalties (5%)", 1500.0),
                line("Marketing Fund (2%)", 600.0),
                line("Ingredient Supply", 900.0),
            ],
        },
        Invoice {
            id: "INV-2024-002".into(),
            store_name: "Uptown Bakery".into(),
            amount: 3200.5,
            status: InvoiceStatus::Pending,
            date: "2024-02-01".into(),
            due_date: "2024-02-15".into(),
            items: vec![
                line("Royalties (5%)", 2500.0),
                line("Marketing Fund (2%)", 700.5),
            ],
        },
        Invoice {
            id: "INV-2024-003".into(),
            store_name: "Westside Express".into(),
            amount: 8500.0,
            status: InvoiceStatus::Overdue,
            date: "2024-01-20".into(),
            due_date: "2024-02-05".into(),
            items: vec![line("Equipment Leasing", 8500.0)],
        },
        Invoice {
            id: "INV-2024-004".into(),
            store_name: "Airport Kiosk".into(),
            amount: 2100.0,
            status: InvoiceStatus::Paid,
            date: "2024-02-05".into(),
            due_date: "2024-02-20".into(),
            items: vec![line("Ingredient Supply", 2100.0)],
        },
        Invoice {
            id: "INV-2024-005".into(),
            store_name: "Downtown Coffee".into(),
            amount: 1500.0,
            status: InvoiceStatus::Pending,
            date: "2024-02-10".into(),
            due_date: "2024-02-25".into(),
            items: vec![line("Marketing Material Design", 1500.0)],
        },
    ]
}

fn demo_stores() -> Vec<Store> {
    fn store(
        id: &str,
        name: &str,
        location: &str,
        manager: &str,
        status: StoreStatus,
        revenue: f64,
        inventory: StoreInventoryStatus,
    ) -> Store {
        Store {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            manager: manager.into(),
            status,
            revenue,
            inventory_status: inventory,
        }
    }

    use StoreInventoryStatus::{Good, Warning};
    vec![
        store("1", "Downtown Store", "123 Main St, New York", "John Smith", StoreStatus::Active, 150_000.0, Good),
        store("2", "Uptown Branch", "456 Park Ave, New York", "Sarah Connor", StoreStatus::Active, 120_000.0, Warning),
        store("3", "Brooklyn Hub", "789 Bedford Ave, Brooklyn", "Mike Ross", StoreStatus::Active, 135_000.0, Good),
        store("4", "Queens Outlet", "321 Queens Blvd, Queens", "Rachel Zane", StoreStatus::Pending, 0.0, Good),
        store("5", "Jersey City", "654 Grove St, Jersey City", "Harvey Specter", StoreStatus::Inactive, 0.0, Good),
    ]
}

fn demo_products() -> Vec<Product> {
    fn product(
        id: &str,
        sku: &str,
        name: &str,
        category: &str,
        price: f64,
        cost: f64,
        unit: &str,
        stock: f64,
    ) -> Product {
        Product {
            id: id.into(),
            sku: sku.into(),
            name: name.into(),
            category: category.into(),
            price,
            cost,
            unit: unit.into(),
            stock,
            image: format!("https://images.example.com/products/{}.jpg", sku),
            status: ProductStatus::Active,
        }
    }

    vec![
        product("1", "BS-001", "Bê bò bistech đặc biệt", "Main Course", 150_000.0, 70_000.0, "portion", 50.0),
        product("2", "BS-002", "Bê bò bistech sốt tiêu", "Main Course", 135_000.0, 65_000.0, "portion", 45.0),
        product("3", "SD-001", "Khoai tây chiên", "Side Dish", 45_000.0, 15_000.0, "portion", 200.0),
        product("4", "SD-002", "Salad trộn", "Side Dish", 35_000.0, 12_000.0, "portion", 150.0),
        product("5", "DR-001", "Rượu vang đỏ", "Drinks", 85_000.0, 40_000.0, "glass", 30.0),
    ]
}

fn demo_materials() -> Vec<Material> {
    fn material(
        id: &str,
        sku: &str,
        name: &str,
        category: &str,
        cost: f64,
        unit: &str,
        stock: f64,
        min: f64,
        supplier: &str,
        expiry: Option<&str>,
    ) -> Material {
        Material {
            id: id.into(),
            sku: sku.into(),
            name: name.into(),
            category: category.into(),
            cost,
            unit: unit.into(),
            stock,
            min_stock_level: min,
            supplier: supplier.into(),
            expiry_date: expiry.map(Into::into),
            status: MaterialStatus::Active,
        }
    }

    vec![
        material("1", "RM-001", "Raw Beef Sirloin", "Meat", 12.0, "kg", 150.0, 50.0, "Green Valley Farm", Some("2023-11-20")),
        material("2", "RM-002", "Black Pepper", "Spices", 25.0, "kg", 20.0, 5.0, "Spice World", None),
        material("3", "PK-001", "Vacuum Bags (Large)", "Packaging", 0.1, "pcs", 5000.0, 1000.0, "PackIt All", None),
        material("4", "RM-003", "Olive Oil", "Condiments", 8.5, "L", 40.0, 10.0, "Global Foods", Some("2024-05-15")),
    ]
}

fn demo_recipes() -> Vec<Recipe> {
    fn ingredient(material_id: &str, name: &str, quantity: f64, unit: &str, cost: f64) -> RecipeItem {
        RecipeItem {
            material_id: material_id.into(),
            material_name: name.into(),
            quantity,
            unit: unit.into(),
            cost_per_unit: cost,
        }
    }

    vec![Recipe {
        id: "REC-001".into(),
        product_id: "1".into(),
        product_name: "Bê bò bistech đặc biệt".into(),
        items: vec![
            ingredient("1", "Thịt bò tươi", 0.25, "kg", 250_000.0),
            ingredient("2", "Sốt tiêu đen", 0.05, "lit", 120_000.0),
            ingredient("3", "Khoai tây", 0.15, "kg", 30_000.0),
        ],
        instructions: "Áp chảo thịt bò đến độ chín mong muốn. Rưới sốt tiêu đen. Phục vụ kèm khoai tây chiên.".into(),
        batch_yield: 1.0,
        total_cost: 73_000.0,
        status: ProductStatus::Active,
        last_updated: "2023-10-25".into(),
    }]
}
