//! Error types for the Netcool client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during objectserver client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client was built without credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error not covered by a more specific variant.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the objectserver.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body was not valid JSON or had the wrong shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// Connection refused, DNS failure, or TLS handshake failure.
    #[error("Connection failed to {0}")]
    ConnectionRefused(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Classify a transport error from `send()`.
    pub(crate) fn from_send_error(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout(url.to_string())
        } else if err.is_connect() {
            Self::ConnectionRefused(format!("{url} ({err})"))
        } else {
            Self::HttpError(err)
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_) | Self::ApiError { status: 401 | 403, .. }
        )
    }

    /// Check if the request never produced an HTTP response.
    pub fn is_network_error(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::ConnectionRefused(_) => true,
            Self::HttpError(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
