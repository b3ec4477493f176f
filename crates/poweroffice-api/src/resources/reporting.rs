use serde_json::Value;

use poweroffice_core::{DateRange, Result};

use crate::client::{ApiClient, RequestOptions};

impl ApiClient {
    /// Time tracking entries registered within `range`.
    pub async fn get_time_tracking_entries(&self, range: &DateRange) -> Result<Value> {
        self.get(
            "/TimeTracking/TimeTrackingEntry",
            RequestOptions::new().date_range(range),
        )
        .await
    }

    /// Posted ledger transactions within `range`.
    pub async fn get_account_transactions(&self, range: &DateRange) -> Result<Value> {
        self.get(
            "/Reporting/AccountTransactions",
            RequestOptions::new().date_range(range),
        )
        .await
    }
}
