//! TLS posture for the objectserver connection.
//!
//! Older objectservers often present self-signed certificates and only speak
//! outdated protocol versions. `TlsMode` makes the relaxation explicit instead
//! of a silent default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the HTTP client treats TLS for HTTPS base URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Verify the certificate chain and hostname.
    #[default]
    Verify,
    /// Accept any certificate and hostname.
    Insecure,
    /// `Insecure`, plus the widest protocol range the TLS backend offers.
    Legacy,
}

impl TlsMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Insecure => "insecure",
            Self::Legacy => "legacy",
        }
    }

    /// True when server certificates are not checked.
    pub const fn skips_verification(self) -> bool {
        matches!(self, Self::Insecure | Self::Legacy)
    }
}

impl fmt::Display for TlsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown TLS mode '{0}' (expected verify, insecure, or legacy)")]
pub struct ParseTlsModeError(String);

impl FromStr for TlsMode {
    type Err = ParseTlsModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verify" => Ok(Self::Verify),
            "insecure" => Ok(Self::Insecure),
            "legacy" => Ok(Self::Legacy),
            other => Err(ParseTlsModeError(other.to_string())),
        }
    }
}
