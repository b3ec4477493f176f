use serde_json::Value;

use poweroffice_core::Result;

use crate::client::{ApiClient, RequestOptions};

impl ApiClient {
    pub async fn create_customer(&self, customer: Value) -> Result<Value> {
        self.post("/customer", RequestOptions::new().json(customer)).await
    }

    /// List customers. Filtering and paging go in `options` as query
    /// parameters.
    pub async fn get_customers(&self, options: RequestOptions) -> Result<Value> {
        self.get("/customer", options).await
    }

    pub async fn get_customer(&self, id: u64) -> Result<Value> {
        self.get(&format!("/customer/{}", id), RequestOptions::new()).await
    }

    pub async fn delete_customer(&self, id: u64) -> Result<Value> {
        self.delete(&format!("/customer/{}", id)).await
    }
}
