//! REST API endpoint implementations.

mod alerts;
pub mod url_encoding;

pub use alerts::{alerts_status_url, fetch_alert_status};
