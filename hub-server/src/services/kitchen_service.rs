//! Production sync engine
//!
//! Materializes production tasks from an approved order and propagates the
//! aggregate task state back onto the order:
//!
//! - all tasks completed            -> order `produced`
//! - any task in progress/completed -> order `in_production`
//! - all tasks pending              -> order untouched
//!
//! The aggregate is recomputed from scratch over all sibling tasks on every
//! single task update; ordering among siblings does not matter.

use std::sync::Arc;

use shared::models::{OrderStatus, ProductionTask, TaskCreate, TaskSpec, TaskStatus};
use shared::{AppResult, util};

use crate::services::OrderStatusUpdater;
use crate::store::Collection;

/// Due date offset for tasks materialized from an order.
const ORDER_TASK_DUE_DAYS: i64 = 2;
/// Default due time for tasks materialized from an order.
const ORDER_TASK_DUE_TIME: &str = "12:00";

/// Production sync engine
pub struct KitchenService {
    tasks: Arc<Collection<ProductionTask>>,
    orders: Arc<dyn OrderStatusUpdater>,
}

impl KitchenService {
    pub fn new(tasks: Arc<Collection<ProductionTask>>, orders: Arc<dyn OrderStatusUpdater>) -> Self {
        Self { tasks, orders }
    }

    /// The full production schedule, in creation order.
    pub async fn schedule(&self) -> Vec<ProductionTask> {
        self.tasks.all()
    }

    /// Bulk-create pending tasks for an order, one per item spec.
    ///
    /// Tasks are due in two days at 12:00 and start unassigned; staff pick
    /// them up from the kitchen board.
    pub async fn create_tasks_from_order(
        &self,
        order_id: &str,
        items: Vec<TaskSpec>,
    ) -> AppResult<Vec<ProductionTask>> {
        let tasks: Vec<ProductionTask> = items
            .into_iter()
            .map(|spec| ProductionTask {
                id: util::resource_id("TASK"),
                order_id: Some(order_id.to_string()),
                product_name: spec.name,
                quantity: spec.quantity,
                unit: "units".to_string(),
                due_date: util::date_in_days(ORDER_TASK_DUE_DAYS),
                due_time: Some(ORDER_TASK_DUE_TIME.to_string()),
                status: TaskStatus::Pending,
                assigned_to: "Unassigned".to_string(),
            })
            .collect();

        for task in &tasks {
            self.tasks.push(task.clone());
        }
        tracing::info!(order_id, count = tasks.len(), "Production tasks created from order");
        Ok(tasks)
    }

    /// Create a standalone task (manual scheduling, no order link).
    ///
    /// Status is forced to `pending` regardless of input.
    pub async fn create_task(&self, payload: TaskCreate) -> AppResult<ProductionTask> {
        let task = ProductionTask {
            id: util::resource_id("TASK"),
            order_id: None,
            product_name: payload.product_name,
            quantity: payload.quantity,
            unit: payload.unit,
            due_date: payload.due_date,
            due_time: payload.due_time,
            status: TaskStatus::Pending,
            assigned_to: payload.assigned_to,
        };
        self.tasks.push(task.clone());
        tracing::info!(task_id = %task.id, product = %task.product_name, "Production task created");
        Ok(task)
    }

    /// Overwrite a task's status, then sync the owning order (if any) from
    /// the aggregate state of all its tasks.
    pub async fn update_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> AppResult<ProductionTask> {
        let task = self.tasks.update(task_id, |t| t.status = status)?;
        tracing::info!(task_id, status = ?status, "Task status updated");

        if let Some(order_id) = task.order_id.clone() {
            self.sync_order_from_tasks(&order_id).await?;
        }
        Ok(task)
    }

    /// Aggregate sync: recompute the order status from all sibling tasks.
    async fn sync_order_from_tasks(&self, order_id: &str) -> AppResult<()> {
        let siblings = self
            .tasks
            .filter(|t| t.order_id.as_deref() == Some(order_id));

        let all_completed = siblings.iter().all(|t| t.status == TaskStatus::Completed);
        let any_started = siblings
            .iter()
            .any(|t| matches!(t.status, TaskStatus::InProgress | TaskStatus::Completed));

        if all_completed {
            tracing::info!(order_id, "All tasks completed, order produced");
            self.orders
                .update_status(order_id, OrderStatus::Produced)
                .await?;
        } else if any_started {
            self.orders
                .update_status(order_id, OrderStatus::InProduction)
                .await?;
        }
        // All pending: the order keeps whatever status it has.
        Ok(())
    }
}

impl std::fmt::Debug for KitchenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KitchenService")
            .field("tasks", &self.tasks)
            .finish()
    }
}
