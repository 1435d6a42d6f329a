//! TLS transport customization for the objectserver HTTP client.
//!
//! This module is responsible for:
//! - Applying a [`TlsMode`] to a `reqwest::ClientBuilder`
//! - Logging every relaxation of TLS verification
//!
//! # Invariants
//! - `TlsMode::Verify` leaves the builder untouched.
//! - Non-default modes have no effect on `http://` URLs; a warning is logged.
//! - Missing backend capabilities are logged and skipped, never fatal.

use reqwest::ClientBuilder;
use reqwest::tls::Version;
use tracing::{debug, warn};

use netcool_config::TlsMode;

/// Apply the TLS posture to an HTTP client builder.
pub(crate) fn apply_tls_mode(
    builder: ClientBuilder,
    mode: TlsMode,
    base_url: &str,
) -> ClientBuilder {
    if mode == TlsMode::Verify {
        return builder;
    }

    if !base_url.starts_with("https://") {
        // No TLS layer on plain HTTP.
        warn!(
            tls_mode = %mode,
            "TLS mode has no effect on HTTP URLs. TLS settings only apply to HTTPS connections."
        );
        return builder;
    }

    // With rustls, accepting invalid certificates also skips hostname checks.
    warn!(
        tls_mode = %mode,
        "Server certificate and hostname verification are DISABLED. \
         The connection is open to interception."
    );
    let builder = builder.danger_accept_invalid_certs(true);

    match mode {
        TlsMode::Legacy => apply_legacy_protocols(builder),
        _ => builder,
    }
}

/// Widen protocol negotiation as far as the TLS backend allows.
fn apply_legacy_protocols(builder: ClientBuilder) -> ClientBuilder {
    // rustls negotiates TLS 1.2 and 1.3 only and ships no weak cipher
    // suites, so a lowered security level cannot be honoured here.
    debug!(
        "Legacy cipher security level is not available with the rustls backend; \
         continuing with the backend's cipher suites"
    );
    builder.min_tls_version(Version::TLS_1_0)
}
