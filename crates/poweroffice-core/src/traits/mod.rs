//! Capability traits implemented outside the core.

mod store;
mod transport;

pub use store::SessionStore;
pub use transport::{HttpBody, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
