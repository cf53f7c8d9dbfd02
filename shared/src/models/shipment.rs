//! Shipment Model

use serde::{Deserialize, Serialize};

/// Shipment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Scheduled,
    InTransit,
    Delivered,
    Delayed,
}

/// A single tracking entry
///
/// Every status change appends exactly one of these; the shipment keeps them
/// newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingUpdate {
    /// `YYYY-MM-DD HH:MM`
    pub timestamp: String,
    pub location: String,
    pub details: String,
    /// Shipment status at the time of this update
    pub status: ShipmentStatus,
}

/// Shipment entity
///
/// `updates` is maintained in reverse-chronological order (newest first).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: String,
    /// Linked order ids
    pub order_ids: Vec<String>,
    pub origin: String,
    pub destination: String,
    pub status: ShipmentStatus,
    /// Estimated arrival, `YYYY-MM-DD HH:MM`
    pub eta: String,
    pub driver: String,
    pub vehicle: String,
    pub updates: Vec<TrackingUpdate>,
}

/// Create shipment payload
///
/// Callers are expected to pre-filter orders by `produced` status; the engine
/// performs no eligibility check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentCreate {
    pub order_ids: Vec<String>,
    pub driver: String,
    pub vehicle: String,
    pub destination: String,
}

/// Update shipment status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentUpdateStatus {
    pub status: ShipmentStatus,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}
