//! Netcool objectserver REST API client.
//!
//! This crate provides a small, type-safe client for reading the
//! `alerts.status` table through the objectserver REST API using HTTP basic
//! authentication, with an explicit TLS posture for legacy servers.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::builder::NetcoolClientBuilder;
pub use client::{FetchOutcome, NetcoolClient};
pub use error::{ClientError, Result};
pub use models::{ALERT_COLUMNS, AlertRecord, AlertStatusResponse, Column, Rowset};
pub use netcool_config::{Credentials, TlsMode};
