//! Shared test utilities for netcool-export integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory that prevents dotenv loading and
//!   host environment leakage.
//! - Mount a mock alerts.status endpoint.
//!
//! Invariants / Assumptions:
//! - Credentials are `root` / `netcool-test-pw` unless a test overrides them.

use assert_cmd::Command;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_USER: &str = "root";
pub const TEST_PASSWORD: &str = "netcool-test-pw";
pub const STATUS_PATH: &str = "/objectserver/restapi/alerts/status";

/// Returns a hermetic `netcool-export` command.
///
/// - `DOTENV_DISABLED=1` prevents local `.env` contamination.
/// - All `NETCOOL_*` variables and `RUST_LOG` are cleared.
/// - Test credentials are set through the environment.
pub fn netcool_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("netcool-export");

    cmd.env("DOTENV_DISABLED", "1").env("NO_COLOR", "1");

    cmd.env_remove("NETCOOL_BASE_URL")
        .env_remove("NETCOOL_TLS_MODE")
        .env_remove("NETCOOL_TIMEOUT")
        .env_remove("NETCOOL_FILTER")
        .env_remove("NETCOOL_OUTPUT_DIR")
        .env_remove("NETCOOL_PROFILE")
        .env_remove("NETCOOL_CONFIG_PATH")
        .env_remove("RUST_LOG");

    cmd.env("NETCOOL_USERNAME", TEST_USER)
        .env("NETCOOL_PASSWORD", TEST_PASSWORD);

    cmd
}

/// Hermetic command pointed at `base_url`.
#[allow(dead_code)]
pub fn netcool_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = netcool_cmd();
    cmd.env("NETCOOL_BASE_URL", base_url);
    cmd
}

/// Mount an alerts.status mock that requires the test credentials.
#[allow(dead_code)]
pub async fn mount_status(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .and(basic_auth(TEST_USER, TEST_PASSWORD))
        .respond_with(response)
        .mount(server)
        .await;
}

/// CSV files in `dir`.
#[allow(dead_code)]
pub fn csv_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    files.sort();
    files
}
