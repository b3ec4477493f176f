use serde_json::Value;

use poweroffice_core::Result;

use crate::client::{ApiClient, RequestOptions};

impl ApiClient {
    pub async fn get_vat_codes(&self, options: RequestOptions) -> Result<Value> {
        self.get("/vatcode", options).await
    }

    pub async fn get_vat_code(&self, id: u64) -> Result<Value> {
        self.get(&format!("/vatcode/{}", id), RequestOptions::new()).await
    }

    /// Ledger accounts that may be used with the VAT code `code`.
    pub async fn get_vat_code_chart_of_account(
        &self,
        code: &str,
        options: RequestOptions,
    ) -> Result<Value> {
        self.get(&format!("VatCode/chartofaccount/{}", code), options).await
    }
}
