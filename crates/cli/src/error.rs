//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use under `--strict`.
//! - Map ClientError variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Deciding whether a failure is fatal (see `main`).
//!
//! Invariants:
//! - Without `--strict` the process exits with `Success` even after a failed
//!   fetch or write; configuration errors always exit with `GeneralError`.

use netcool_client::ClientError;

/// Structured exit codes for netcool-export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Export ran (or failures were tolerated).
    Success = 0,

    /// General error - configuration, file write, or unclassified failure.
    GeneralError = 1,

    /// Authentication failure - HTTP 401/403 from the objectserver.
    AuthenticationFailed = 2,

    /// Connection error - refused, DNS, TLS handshake, or timeout.
    ///
    /// Scripts may retry later.
    ConnectionError = 3,

    /// The objectserver answered with something other than an alerts rowset.
    InvalidResponse = 5,

    /// Service unavailable - HTTP 502/503/504.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError {
                status: 401 | 403, ..
            } => ExitCode::AuthenticationFailed,

            ClientError::ConnectionRefused(_) => ExitCode::ConnectionError,
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::InvalidResponse(_) => ExitCode::InvalidResponse,

            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
