//! poweroffice-core - Core types and traits for the PowerOffice Go client.
//!
//! The stateful part of the client lives here: the token [`Session`] and the
//! [`SessionStore`] contract it persists through. The HTTP side is described
//! only as a capability ([`HttpTransport`]) so that this crate never touches
//! the network.

pub mod clock;
pub mod credentials;
pub mod error;
pub mod session;
pub mod store;
pub mod tokens;
pub mod traits;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use credentials::Credentials;
pub use error::Error;
pub use session::{Session, SessionState, TokenGrant};
pub use store::MemoryStore;
pub use tokens::{AccessToken, RefreshToken};
pub use traits::{HttpBody, HttpMethod, HttpRequest, HttpResponse, HttpTransport, SessionStore};
pub use types::{DateRange, Endpoints, Mode};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
