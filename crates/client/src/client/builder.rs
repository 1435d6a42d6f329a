//! Client builder for constructing [`NetcoolClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects, TLS posture)
//!
//! # Invariants
//! - `base_url` and `credentials` are required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - TLS verification stays on unless a non-default [`TlsMode`] is set

use std::time::Duration;

use crate::client::NetcoolClient;
use crate::client::transport::apply_tls_mode;
use crate::error::{ClientError, Result};
use crate::models::ALERT_COLUMNS;
use netcool_config::{
    Config, Credentials, TlsMode,
    constants::{DEFAULT_ALERT_FILTER, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`NetcoolClient`].
///
/// # Example
///
/// ```rust,ignore
/// use netcool_client::{Credentials, NetcoolClient, TlsMode};
/// use secrecy::SecretString;
///
/// let client = NetcoolClient::builder()
///     .base_url("https://netcool.example.com:8443".to_string())
///     .credentials(Credentials::new("root", SecretString::new("pw".into())))
///     .tls_mode(TlsMode::Legacy)
///     .build()?;
/// ```
pub struct NetcoolClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    tls_mode: TlsMode,
    timeout: Duration,
    filter: String,
}

impl Default for NetcoolClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            tls_mode: TlsMode::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            filter: DEFAULT_ALERT_FILTER.to_string(),
        }
    }
}

impl NetcoolClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the objectserver, e.g. `https://netcool:8443`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the basic-auth credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the TLS posture.
    ///
    /// # Security Warning
    /// `Insecure` and `Legacy` disable certificate verification and make the
    /// connection vulnerable to man-in-the-middle attacks.
    pub fn tls_mode(mut self, mode: TlsMode) -> Self {
        self.tls_mode = mode;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the alerts.status row filter. Default is `Severity > 0`.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(config.credentials.clone());
        self.tls_mode = config.connection.tls_mode;
        self.timeout = config.connection.timeout;
        self.filter = config.export.filter.clone();
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`NetcoolClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if `credentials` were not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<NetcoolClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));
        let http = apply_tls_mode(http_builder, self.tls_mode, &base_url).build()?;

        Ok(NetcoolClient {
            http,
            base_url,
            credentials,
            tls_mode: self.tls_mode,
            filter: self.filter,
            columns: ALERT_COLUMNS.to_vec(),
        })
    }
}
