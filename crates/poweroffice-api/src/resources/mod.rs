//! Typed wrappers over [`ApiClient::perform_request`](crate::ApiClient::perform_request).
//!
//! Each wrapper is a fixed method and path. Bodies and results stay as
//! `serde_json::Value`; the API's schemas are owned by PowerOffice.

mod customers;
mod delivery;
mod invoices;
mod ledger;
mod products;
mod reporting;
mod vat_codes;

pub use delivery::InvoiceDeliveryType;
