//! Inventory Model

use serde::{Deserialize, Serialize};

/// What kind of stock an inventory row tracks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InventoryItemType {
    Product,
    Material,
}

/// A stock level at a location
///
/// `location_id` is `"kitchen"` for the central kitchen or a store id.
/// Quantity >= 0 is expected but not enforced by the adjustment engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    /// Reference to a Product or Material id
    pub item_id: String,
    pub item_name: String,
    #[serde(rename = "type")]
    pub item_type: InventoryItemType,
    pub location_id: String,
    pub quantity: f64,
    pub unit: String,
    pub min_stock_level: f64,
    /// `YYYY-MM-DD`
    pub last_updated: String,
}

impl InventoryItem {
    /// Read-time low-stock predicate; not persisted state.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock_level
    }
}

/// Stock adjustment payload
///
/// `reason` is accepted for audit purposes but not persisted on the item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjust {
    pub quantity: f64,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, min: f64) -> InventoryItem {
        InventoryItem {
            id: "INV-001".into(),
            item_id: "1".into(),
            item_name: "Raw Beef Sirloin".into(),
            item_type: InventoryItemType::Material,
            location_id: "kitchen".into(),
            quantity,
            unit: "kg".into(),
            min_stock_level: min,
            last_updated: "2023-10-26".into(),
        }
    }

    #[test]
    fn test_low_stock_predicate() {
        assert!(item(5.0, 10.0).is_low_stock());
        assert!(item(10.0, 10.0).is_low_stock());
        assert!(!item(11.0, 10.0).is_low_stock());
    }

    #[test]
    fn test_type_field_rename() {
        let json = serde_json::to_string(&item(1.0, 1.0)).unwrap();
        assert!(json.contains("\"type\":\"material\""));
        assert!(json.contains("\"minStockLevel\""));
    }
}
