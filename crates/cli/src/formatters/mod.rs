//! Output formatting for exported alerts.
//!
//! Responsibilities:
//! - Render alert records as CSV bytes.
//! - Shared cell rendering and atomic file writing.
//!
//! Does NOT handle:
//! - Choosing the output path or logging outcomes (see `export`).

pub mod common;
pub mod csv;

pub use self::csv::build_alerts_csv;
pub use common::write_to_file;
