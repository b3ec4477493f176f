use serde_json::Value;

use poweroffice_core::Result;

use crate::client::{ApiClient, RequestOptions};

impl ApiClient {
    pub async fn get_products(&self, options: RequestOptions) -> Result<Value> {
        self.get("/product", options).await
    }

    pub async fn get_product(&self, id: u64) -> Result<Value> {
        self.get(&format!("/product/{}", id), RequestOptions::new()).await
    }

    pub async fn create_product(&self, product: Value) -> Result<Value> {
        self.post("/product", RequestOptions::new().json(product)).await
    }

    pub async fn delete_product(&self, id: u64) -> Result<Value> {
        self.delete(&format!("/product/{}", id)).await
    }
}
