//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `NETCOOL_*` environment variables.
//! - Apply them to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return ConfigError::InvalidValue naming the variable.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::TlsMode;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over profile settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("NETCOOL_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("NETCOOL_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("NETCOOL_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(mode) = env_var_or_none("NETCOOL_TLS_MODE") {
        let mode: TlsMode = mode.parse().map_err(|e| ConfigError::InvalidValue {
            var: "NETCOOL_TLS_MODE".to_string(),
            message: format!("{e}"),
        })?;
        loader.set_tls_mode(Some(mode));
    }
    if let Some(timeout) = env_var_or_none("NETCOOL_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "NETCOOL_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(filter) = env_var_or_none("NETCOOL_FILTER") {
        loader.set_filter(Some(filter));
    }
    if let Some(dir) = env_var_or_none("NETCOOL_OUTPUT_DIR") {
        loader.set_output_dir(Some(PathBuf::from(dir)));
    }

    Ok(())
}
