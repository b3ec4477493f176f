use serde_json::Value;

use poweroffice_core::Result;

use crate::client::{ApiClient, RequestOptions};

impl ApiClient {
    pub async fn get_general_ledger_accounts(&self, options: RequestOptions) -> Result<Value> {
        self.get("/GeneralLedgerAccount", options).await
    }
}
