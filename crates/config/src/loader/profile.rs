//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Resolve the profile name and file path, falling back to
//!   `NETCOOL_PROFILE` and `NETCOOL_CONFIG_PATH`.
//! - Load the named profile from the JSON profile file.
//! - Apply profile settings to a ConfigLoader instance.
//!
//! Invariants:
//! - Profile settings are applied before environment variables (env vars take precedence).
//! - Missing profiles (or a missing file) are recorded for later error handling in build().

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::config_file::read_config_file;
use crate::types::ProfileConfig;

/// Apply profile configuration from the profile file to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    // Explicit settings win over the environment.
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none("NETCOOL_CONFIG_PATH")
    {
        loader.set_config_path(Some(PathBuf::from(config_path)));
    }
    if loader.profile_name().is_none()
        && let Some(profile) = env_var_or_none("NETCOOL_PROFILE")
    {
        loader.set_profile_name(Some(profile));
    }

    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = match loader.config_path() {
        Some(path) if path.exists() => path.clone(),
        _ => {
            loader.set_profile_missing(Some(profile_name));
            return Ok(());
        }
    };

    let file = read_config_file(&config_path)?;

    match file.profiles.get(&profile_name) {
        Some(profile) => {
            tracing::debug!(profile = %profile_name, path = %config_path.display(), "Applying profile");
            apply_profile_config(loader, profile);
        }
        None => loader.set_profile_missing(Some(profile_name)),
    }

    Ok(())
}

/// Apply profile configuration values to the loader.
fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    if let Some(url) = &profile.base_url {
        loader.set_base_url(Some(url.clone()));
    }
    if let Some(username) = &profile.username {
        loader.set_username(Some(username.clone()));
    }
    if let Some(password) = &profile.password {
        loader.set_password(Some(password.clone()));
    }
    if let Some(mode) = profile.tls_mode {
        loader.set_tls_mode(Some(mode));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(std::time::Duration::from_secs(secs)));
    }
    if let Some(filter) = &profile.filter {
        loader.set_filter(Some(filter.clone()));
    }
    if let Some(dir) = &profile.output_dir {
        loader.set_output_dir(Some(dir.clone()));
    }
}
