//! poweroffice-api - Authenticated client for the PowerOffice Go REST API.
//!
//! [`ApiClient`] runs the OAuth token grants against the auth host, keeps the
//! [`Session`](poweroffice_core::Session) up to date, and dispatches bearer
//! authenticated calls to the API host. Resource helpers such as
//! [`ApiClient::get_customer`] are thin wrappers over
//! [`ApiClient::perform_request`].
//!
//! # Example
//!
//! ```no_run
//! use poweroffice_api::{ApiClient, ReqwestTransport};
//! use poweroffice_core::{Credentials, Mode, Session};
//!
//! # async fn example() -> Result<(), poweroffice_core::Error> {
//! let client = ApiClient::new(
//!     ReqwestTransport::new(),
//!     Session::in_memory(),
//!     Credentials::new("application-key", "client-key"),
//!     Mode::Test,
//! );
//!
//! client.acquire_token().await?;
//! let customer = client.get_customer(42).await?;
//! println!("{}", customer["Name"]);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod requests;
pub mod resources;
pub mod transport;

pub use client::{ApiClient, RequestOptions};
pub use requests::ExternallyDeliverableInvoiceDelivered;
pub use resources::InvoiceDeliveryType;
pub use transport::ReqwestTransport;
