//! Configuration type definitions for the Netcool exporter.
//!
//! Responsibilities:
//! - Define configuration types for credentials, connections, TLS posture, export settings, and profiles.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections or TLS setup (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - `TlsMode::Verify` is the default; weaker modes are always opt-in.

mod auth;
pub(crate) mod connection;
mod profile;
mod tls;

pub use auth::Credentials;
pub use connection::{Config, ConnectionConfig, ExportConfig};
pub use profile::ProfileConfig;
pub use tls::{ParseTlsModeError, TlsMode};
