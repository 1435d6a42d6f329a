//! Profile configuration types.
//!
//! Responsibilities:
//! - Define `ProfileConfig` for named objectserver profiles in the config file.
//! - Support partial configuration (all fields optional).
//!
//! Does NOT handle:
//! - Profile loading or merging (see `loader` module).
//!
//! Invariants:
//! - All fields are optional to allow partial profile definitions.
//! - ProfileConfig uses `#[serde(default)]` so unknown/missing keys never fail parsing.

use crate::types::tls::TlsMode;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional-secret serde helper for profile passwords.
mod opt_secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret
            .as_ref()
            .map(|s| s.expose_secret().to_string())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Named connection profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Base URL of the objectserver
    pub base_url: Option<String>,
    /// Username for basic authentication
    pub username: Option<String>,
    /// Password for basic authentication
    #[serde(with = "opt_secret_string")]
    pub password: Option<SecretString>,
    /// TLS posture
    pub tls_mode: Option<TlsMode>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Row filter for alerts.status
    pub filter: Option<String>,
    /// Output directory for CSV files
    pub output_dir: Option<PathBuf>,
}
