use serde_json::Value;
use tracing::info;

use poweroffice_core::Result;

use crate::client::{ApiClient, RequestOptions};
use crate::requests::ExternallyDeliverableInvoiceDelivered;

impl ApiClient {
    pub async fn create_outgoing_invoice(&self, invoice: Value) -> Result<Value> {
        self.post("/outgoinginvoice", RequestOptions::new().json(invoice)).await
    }

    pub async fn get_outgoing_invoices(&self, options: RequestOptions) -> Result<Value> {
        self.get("/outgoinginvoice/list", options).await
    }

    pub async fn get_outgoing_invoice(&self, id: u64) -> Result<Value> {
        self.get(&format!("/outgoinginvoice/{}", id), RequestOptions::new()).await
    }

    pub async fn delete_outgoing_invoice(&self, id: u64) -> Result<Value> {
        self.delete(&format!("/outgoinginvoice/{}", id)).await
    }

    /// Report that an invoice handed to an external channel was delivered.
    pub async fn mark_externally_deliverable_invoice_delivered(
        &self,
        request: &ExternallyDeliverableInvoiceDelivered,
    ) -> Result<Value> {
        info!(invoice_id = request.invoice_id(), "Marking invoice delivered");
        self.post(
            "/ExternallyDeliverableInvoice/Delivered",
            RequestOptions::new().json(request.to_value()),
        )
        .await
    }
}
