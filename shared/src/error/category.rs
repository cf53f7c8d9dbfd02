//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors (1xxx-2xxx reserved)
/// - 3xxx: Catalog errors
/// - 4xxx: Order errors
/// - 5xxx: Production errors
/// - 6xxx: Shipment errors
/// - 7xxx: Inventory errors
/// - 8xxx: Billing errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx, 1xxx-2xxx reserved)
    General,
    /// Catalog errors (3xxx)
    Catalog,
    /// Order errors (4xxx)
    Order,
    /// Production errors (5xxx)
    Production,
    /// Shipment errors (6xxx)
    Shipment,
    /// Inventory errors (7xxx)
    Inventory,
    /// Billing errors (8xxx)
    Billing,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..3000 => Self::General,
            3000..4000 => Self::Catalog,
            4000..5000 => Self::Order,
            5000..6000 => Self::Production,
            6000..7000 => Self::Shipment,
            7000..8000 => Self::Inventory,
            8000..9000 => Self::Billing,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Catalog => "catalog",
            Self::Order => "order",
            Self::Production => "production",
            Self::Shipment => "shipment",
            Self::Inventory => "inventory",
            Self::Billing => "billing",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
