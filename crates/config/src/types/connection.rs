//! Connection and export configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS posture, timeout).
//! - Define export settings (row filter, output directory).
//! - Define the main `Config` structure combining connection, credentials and export.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{DEFAULT_ALERT_FILTER, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::Credentials;
use crate::types::tls::TlsMode;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the objectserver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the objectserver (e.g., https://netcool.example.com:8443)
    pub base_url: String,
    /// TLS posture for HTTPS connections
    #[serde(default)]
    pub tls_mode: TlsMode,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

/// What to export and where to put it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Row filter sent as the `filter` query parameter
    pub filter: String,
    /// Directory receiving timestamped CSV files
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_ALERT_FILTER.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Basic-auth credentials
    pub credentials: Credentials,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Create a config with default connection and export settings.
    pub fn new(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                tls_mode: TlsMode::default(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            credentials: Credentials::new(username, password),
            export: ExportConfig::default(),
        }
    }
}
