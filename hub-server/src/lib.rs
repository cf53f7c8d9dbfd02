//! Ladle Hub Server - franchise back office for the restaurant chain
//!
//! # Overview
//!
//! The hub tracks a franchise order through its whole lifecycle: stores
//! submit supply orders, the central kitchen materializes them into
//! production tasks, finished orders are batched into shipments, and
//! delivery closes the loop. Inventory, invoices, and a live dashboard
//! round out the admin surface.
//!
//! # Module structure
//!
//! ```text
//! hub-server/src/
//! ├── core/       # configuration, state, server
//! ├── store/      # in-memory entity collections
//! ├── services/   # business engines + demo dataset
//! ├── api/        # HTTP routes and handlers
//! └── utils/      # logging, error re-exports
//! ```

pub mod api;
pub mod core;
pub mod services;
pub mod store;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use services::{
    BillingService, DashboardService, DashboardStats, InventoryService, KitchenService,
    OrderService, OrderStatusUpdater, ShipmentService,
};
pub use store::{Collection, Keyed};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env, then bring up logging from the environment.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __          __    ____
   / /   ____ _/ /___/ / /__
  / /   / __ `/ __  / / _ \
 / /___/ /_/ / /_/ / /  __/
/_____/\__,_/\__,_/_/\___/
    __  __      __
   / / / /_  __/ /_
  / /_/ / / / / __ \
 / __  / /_/ / /_/ /
/_/ /_/\__,_/_.___/
    "#
    );
}
