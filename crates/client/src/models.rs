//! Data models for objectserver REST API responses.

mod alerts;

pub use alerts::{ALERT_COLUMNS, AlertRecord, AlertStatusResponse, Column, Rowset, column_list};
