//! Unified error codes for the Ladle hub
//!
//! This module defines all error codes used across the hub server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 3xxx: Catalog errors
//! - 4xxx: Order errors
//! - 5xxx: Production errors
//! - 6xxx: Shipment errors
//! - 7xxx: Inventory errors
//! - 8xxx: Billing errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 3xxx: Catalog ====================
    /// Store not found
    StoreNotFound = 3001,
    /// Product not found
    ProductNotFound = 3002,
    /// Material not found
    MaterialNotFound = 3003,
    /// Recipe not found
    RecipeNotFound = 3004,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no line items
    OrderEmpty = 4002,

    // ==================== 5xxx: Production ====================
    /// Production task not found
    TaskNotFound = 5001,

    // ==================== 6xxx: Shipment ====================
    /// Shipment not found
    ShipmentNotFound = 6001,

    // ==================== 7xxx: Inventory ====================
    /// Inventory item not found
    InventoryItemNotFound = 7001,

    // ==================== 8xxx: Billing ====================
    /// Invoice not found
    InvoiceNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default English message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",

            // Catalog
            ErrorCode::StoreNotFound => "Store not found",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::MaterialNotFound => "Material not found",
            ErrorCode::RecipeNotFound => "Recipe not found",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order is empty",

            // Production
            ErrorCode::TaskNotFound => "Production task not found",

            // Shipment
            ErrorCode::ShipmentNotFound => "Shipment not found",

            // Inventory
            ErrorCode::InventoryItemNotFound => "Inventory item not found",

            // Billing
            ErrorCode::InvoiceNotFound => "Invoice not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Catalog
            3001 => Ok(ErrorCode::StoreNotFound),
            3002 => Ok(ErrorCode::ProductNotFound),
            3003 => Ok(ErrorCode::MaterialNotFound),
            3004 => Ok(ErrorCode::RecipeNotFound),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),

            // Production
            5001 => Ok(ErrorCode::TaskNotFound),

            // Shipment
            6001 => Ok(ErrorCode::ShipmentNotFound),

            // Inventory
            7001 => Ok(ErrorCode::InventoryItemNotFound),

            // Billing
            8001 => Ok(ErrorCode::InvoiceNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
