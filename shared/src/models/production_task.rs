//! Production Task Model

use serde::{Deserialize, Serialize};

/// Production task status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// A unit of kitchen work, optionally tied to a customer order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionTask {
    pub id: String,
    /// Weak back-reference to the owning order, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    /// Due date, `YYYY-MM-DD`
    pub due_date: String,
    /// Due time, e.g. "14:30"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    pub status: TaskStatus,
    pub assigned_to: String,
}

/// Create standalone task payload (manual scheduling)
///
/// Status is forced to `pending` regardless of input, and no order link is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub due_date: String,
    #[serde(default)]
    pub due_time: Option<String>,
    pub assigned_to: String,
}

/// Item spec for bulk task creation from an approved order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    pub name: String,
    pub quantity: f64,
}

/// Update task status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUpdateStatus {
    pub status: TaskStatus,
}
