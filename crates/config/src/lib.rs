//! Configuration management for the Netcool alert exporter.
//!
//! This crate provides types and loaders for the objectserver connection,
//! credentials, query, and output settings, sourced from a JSON profile file,
//! environment variables (optionally via `.env`), and explicit overrides.

mod config_file;
pub mod constants;
mod loader;
pub mod types;

pub use config_file::{ConfigFile, ConfigFileError, read_config_file};
pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, Credentials, ExportConfig, ProfileConfig, TlsMode};
