//! Catalog Models
//!
//! Reference data behind the order domain: franchise stores, the product
//! catalog, raw materials, and recipes linking products to materials.
//! The hub serves these read-only; catalog management stays with the
//! back-office tooling.

use serde::{Deserialize, Serialize};

/// Franchise store status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    Active,
    Inactive,
    Pending,
}

/// Store-level inventory health, as reported by the store
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreInventoryStatus {
    Good,
    Warning,
    Critical,
}

/// A franchise store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub location: String,
    pub manager: String,
    pub status: StoreStatus,
    /// Revenue in currency unit
    pub revenue: f64,
    pub inventory_status: StoreInventoryStatus,
}

/// Product catalog status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
}

/// A sellable product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    /// Sale price in currency unit
    pub price: f64,
    /// Production cost in currency unit
    pub cost: f64,
    pub unit: String,
    pub stock: f64,
    pub image: String,
    pub status: ProductStatus,
}

/// Raw material status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaterialStatus {
    Active,
    Archived,
}

/// A raw material the central kitchen consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub sku: String,
    /// e.g. Meat, Spices, Packaging
    pub category: String,
    pub name: String,
    pub cost: f64,
    pub unit: String,
    pub stock: f64,
    pub min_stock_level: f64,
    pub supplier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    pub status: MaterialStatus,
}

/// One material line in a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeItem {
    pub material_id: String,
    /// Denormalized for display
    pub material_name: String,
    pub quantity: f64,
    pub unit: String,
    /// Cost snapshot at the time the recipe was saved
    pub cost_per_unit: f64,
}

impl RecipeItem {
    pub fn line_cost(&self) -> f64 {
        self.quantity * self.cost_per_unit
    }
}

/// A recipe turning materials into one product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub items: Vec<RecipeItem>,
    pub instructions: String,
    /// How many product units one batch produces
    #[serde(rename = "yield")]
    pub batch_yield: f64,
    pub total_cost: f64,
    pub status: ProductStatus,
    /// `YYYY-MM-DD`
    pub last_updated: String,
}
