//! Objectserver REST API client.
//!
//! This module provides the [`NetcoolClient`] used to read `alerts.status`.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `transport`: TLS posture applied to the HTTP client (private module)
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Writing records anywhere; callers own output
//!
//! # Invariants
//! - [`NetcoolClient::fetch_alerts`] never returns an error: failures are logged
//!   and carried in [`FetchOutcome::Failed`].

pub mod builder;
mod transport;

use tracing::{error, info};

use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{AlertRecord, Column};
use netcool_config::{Credentials, TlsMode};

/// Result of one fetch, keeping "zero alerts" distinct from "fetch failed".
#[derive(Debug)]
pub enum FetchOutcome {
    /// The request succeeded; the list may be empty.
    Fetched(Vec<AlertRecord>),
    /// The request failed; no records are available.
    Failed(ClientError),
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Records fetched, or an empty slice on failure.
    pub fn records(&self) -> &[AlertRecord] {
        match self {
            Self::Fetched(records) => records,
            Self::Failed(_) => &[],
        }
    }

    /// Records fetched, treating a failure as zero records.
    pub fn into_records(self) -> Vec<AlertRecord> {
        match self {
            Self::Fetched(records) => records,
            Self::Failed(_) => Vec::new(),
        }
    }

    pub fn into_result(self) -> Result<Vec<AlertRecord>> {
        match self {
            Self::Fetched(records) => Ok(records),
            Self::Failed(err) => Err(err),
        }
    }
}

impl From<Result<Vec<AlertRecord>>> for FetchOutcome {
    fn from(result: Result<Vec<AlertRecord>>) -> Self {
        match result {
            Ok(records) => Self::Fetched(records),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Netcool objectserver REST API client.
///
/// Use [`NetcoolClient::builder()`] to create one.
#[derive(Debug)]
pub struct NetcoolClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) tls_mode: TlsMode,
    pub(crate) filter: String,
    pub(crate) columns: Vec<Column>,
}

impl NetcoolClient {
    /// Create a new client builder.
    pub fn builder() -> builder::NetcoolClientBuilder {
        builder::NetcoolClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tls_mode(&self) -> TlsMode {
        self.tls_mode
    }

    /// Row filter sent with every request.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Columns requested, in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Read alerts, propagating any failure.
    pub async fn try_fetch_alerts(&self) -> Result<Vec<AlertRecord>> {
        endpoints::fetch_alert_status(
            &self.http,
            &self.base_url,
            &self.credentials,
            &self.columns,
            &self.filter,
        )
        .await
    }

    /// Read alerts, logging progress and any failure.
    pub async fn fetch_alerts(&self) -> FetchOutcome {
        info!(
            base_url = %self.base_url,
            tls_mode = %self.tls_mode,
            "Fetching alerts from Netcool"
        );

        let outcome = FetchOutcome::from(self.try_fetch_alerts().await);
        match &outcome {
            FetchOutcome::Fetched(records) => {
                info!(count = records.len(), "Fetched {} alerts", records.len());
            }
            FetchOutcome::Failed(err) => {
                error!(error = %err, "Failed to fetch alerts");
            }
        }
        outcome
    }
}
