//! Centralized constants for the Netcool export workspace.
//!
//! Default values used across crates, kept here to avoid magic number
//! duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Objectserver Query Defaults
// =============================================================================

/// REST path of the alerts.status table on the objectserver.
pub const ALERTS_STATUS_PATH: &str = "/objectserver/restapi/alerts/status";

/// Default row filter applied to alerts.status.
pub const DEFAULT_ALERT_FILTER: &str = "Severity > 0";

// =============================================================================
// Output Defaults
// =============================================================================

/// Prefix of generated CSV file names.
pub const OUTPUT_FILE_PREFIX: &str = "netcool_alerts_";

/// `chrono` format of the timestamp embedded in generated file names.
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Default output directory (the working directory).
pub const DEFAULT_OUTPUT_DIR: &str = ".";
