//! JSON profile file reading.
//!
//! Responsibilities:
//! - Define the on-disk shape of the profile file.
//! - Read and parse it, reporting the path on failure.
//!
//! Does NOT handle:
//! - Merging profile values with env/CLI values (see `loader`).
//! - Writing the file; profiles are edited by hand.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ProfileConfig;

/// Representation of the profile file on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Named profiles for different objectservers.
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

/// Errors that can occur when reading the profile file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the profile file from disk.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
