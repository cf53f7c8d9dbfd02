//! Invoice billing engine
//!
//! Invoices are peripheral to the order lifecycle: nothing links them to
//! orders or shipments, and no other engine cascades into them.

use std::sync::Arc;

use shared::AppResult;
use shared::models::{Invoice, InvoiceStatus};

use crate::store::Collection;

/// Invoice billing engine
#[derive(Debug)]
pub struct BillingService {
    invoices: Arc<Collection<Invoice>>,
}

impl BillingService {
    pub fn new(invoices: Arc<Collection<Invoice>>) -> Self {
        Self { invoices }
    }

    pub async fn list(&self) -> Vec<Invoice> {
        self.invoices.all()
    }

    /// Overwrite the invoice status. Unknown ids are reported, not ignored.
    pub async fn update_status(&self, id: &str, status: InvoiceStatus) -> AppResult<Invoice> {
        let invoice = self.invoices.update(id, |i| i.status = status)?;
        tracing::info!(invoice_id = %id, status = ?status, "Invoice status updated");
        Ok(invoice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn invoice(id: &str, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: id.into(),
            store_name: "Downtown Coffee".into(),
            amount: 5000.0,
            status,
            date: "2024-01-15".into(),
            due_date: "2024-01-30".into(),
            items: vec![],
        }
    }

    fn service(rows: Vec<Invoice>) -> BillingService {
        let invoices = Arc::new(Collection::new("invoice", |id| {
            shared::AppError::invoice_not_found(id)
        }));
        for r in rows {
            invoices.push(r);
        }
        BillingService::new(invoices)
    }

    #[tokio::test]
    async fn test_update_status() {
        let svc = service(vec![invoice("INV-2024-002", InvoiceStatus::Pending)]);
        let updated = svc
            .update_status("INV-2024-002", InvoiceStatus::Paid)
            .await
            .unwrap();
        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert_eq!(svc.list().await[0].status, InvoiceStatus::Paid);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let svc = service(vec![]);
        let err = svc
            .update_status("INV-0", InvoiceStatus::Cancelled)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvoiceNotFound);
    }
}
