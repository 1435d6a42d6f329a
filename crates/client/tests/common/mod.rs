//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use netcool_client::testing::load_fixture;

#[allow(unused_imports)]
pub use netcool_client::{ClientError, Credentials, FetchOutcome, NetcoolClient, TlsMode};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_USER: &str = "root";
pub const TEST_PASSWORD: &str = "netcool-test-pw";

/// Credentials matching [`TEST_USER`] and [`TEST_PASSWORD`].
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new(
        TEST_USER,
        secrecy::SecretString::new(TEST_PASSWORD.to_string().into()),
    )
}

/// Client pointed at the mock server with default settings.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> NetcoolClient {
    NetcoolClient::builder()
        .base_url(server.uri())
        .credentials(test_credentials())
        .build()
        .expect("client should build")
}
