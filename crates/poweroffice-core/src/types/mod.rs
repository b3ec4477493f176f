//! Validated value types.

mod base_url;
mod date_range;
mod mode;

pub use base_url::BaseUrl;
pub use date_range::{DateRange, QUERY_DATETIME_FORMAT, format_query_datetime};
pub use mode::{Endpoints, Mode};
