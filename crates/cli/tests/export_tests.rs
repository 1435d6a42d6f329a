//! End-to-end tests for the `netcool-export` binary.

mod common;

use common::*;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOM: &[u8] = b"\xEF\xBB\xBF";
const HEADER: &str = "Node,Summary,Severity,FirstOccurrence,LastOccurrence,Tally,Identifier";

fn one_alert() -> serde_json::Value {
    json!({
        "rowset": {
            "affectedRows": 1,
            "rows": [{"Node": "srv1", "Summary": "Disk full", "Severity": 5, "Tally": 3}]
        }
    })
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[test]
fn test_help_lists_flags() {
    netcool_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--tls-mode"))
        .stdout(predicate::str::contains("--output-file"))
        .stdout(predicate::str::contains("--strict"));
}

#[tokio::test]
async fn test_export_writes_timestamped_csv() {
    let temp_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, ResponseTemplate::new(200).set_body_json(one_alert())).await;

    netcool_cmd_with_base_url(&mock_server.uri())
        .args(["--output-dir", temp_dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetched 1 alerts"))
        .stdout(predicate::str::contains("Wrote 1 alerts"))
        .stdout(predicate::str::contains(TEST_PASSWORD).not());

    let files = csv_files(temp_dir.path());
    assert_eq!(files.len(), 1, "expected exactly one CSV file");

    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("netcool_alerts_"), "unexpected name: {name}");

    let bytes = fs::read(&files[0]).unwrap();
    assert!(bytes.starts_with(BOM));
    let text = std::str::from_utf8(&bytes[BOM.len()..]).unwrap();
    assert_eq!(text, format!("{HEADER}\r\nsrv1,Disk full,5,,,3,\r\n"));
}

#[tokio::test]
async fn test_export_output_file_flag() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out").join("alerts.csv");
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(netcool_client::testing::load_fixture(
            "alerts/status.json",
        )),
    )
    .await;

    netcool_cmd_with_base_url(&mock_server.uri())
        .args(["--output-file", output_path.to_str().unwrap()])
        .assert()
        .success();

    let bytes = fs::read(&output_path).unwrap();
    let mut reader = csv::Reader::from_reader(&bytes[BOM.len()..]);
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[1][1], "Replication lag, 120s");
    assert_eq!(&rows[2][1], "Interface \"ge-0/0/1\" down");
}

#[tokio::test]
async fn test_export_empty_rows_creates_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(json!({"rowset": {"rows": []}})),
    )
    .await;

    netcool_cmd_with_base_url(&mock_server.uri())
        .args(["--output-dir", temp_dir.path().to_str().unwrap(), "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No alerts to save"));

    assert!(csv_files(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_export_missing_rowset_creates_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    netcool_cmd_with_base_url(&mock_server.uri())
        .args(["--output-dir", temp_dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(csv_files(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_export_sends_filter_from_flag() {
    let temp_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .and(query_param("filter", "Severity >= 4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_alert()))
        .expect(1)
        .mount(&mock_server)
        .await;

    netcool_cmd_with_base_url(&mock_server.uri())
        .env("NETCOOL_FILTER", "Severity > 1")
        .args([
            "--filter",
            "Severity >= 4",
            "--output-dir",
            temp_dir.path().to_str().unwrap(),
            "--strict",
        ])
        .assert()
        .success();
}

#[tokio::test]
async fn test_fetch_failure_exits_zero_without_strict() {
    let temp_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, ResponseTemplate::new(401)).await;

    netcool_cmd_with_base_url(&mock_server.uri())
        .args(["--output-dir", temp_dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to fetch alerts"))
        .stdout(predicate::str::contains("No alerts to save"));

    assert!(csv_files(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_strict_auth_failure_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, ResponseTemplate::new(401)).await;

    netcool_cmd_with_base_url(&mock_server.uri())
        .args(["--output-dir", temp_dir.path().to_str().unwrap(), "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to fetch alerts"));
}

#[tokio::test]
async fn test_strict_wrong_password_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, ResponseTemplate::new(200).set_body_json(one_alert())).await;
    // Requests with other credentials fall through to wiremock's default 404.

    netcool_cmd_with_base_url(&mock_server.uri())
        .env("NETCOOL_PASSWORD", "wrong")
        .args(["--output-dir", temp_dir.path().to_str().unwrap(), "--strict"])
        .assert()
        .code(1);

    assert!(csv_files(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_strict_invalid_response_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    netcool_cmd_with_base_url(&mock_server.uri())
        .args(["--output-dir", temp_dir.path().to_str().unwrap(), "--strict"])
        .assert()
        .code(5);
}

#[tokio::test]
async fn test_strict_service_unavailable_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, ResponseTemplate::new(503)).await;

    netcool_cmd_with_base_url(&mock_server.uri())
        .args(["--output-dir", temp_dir.path().to_str().unwrap(), "--strict"])
        .assert()
        .code(8);
}

#[test]
fn test_connection_refused() {
    let temp_dir = TempDir::new().unwrap();
    let base_url = closed_port_url();

    netcool_cmd_with_base_url(&base_url)
        .args(["--output-dir", temp_dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to fetch alerts"));

    netcool_cmd_with_base_url(&base_url)
        .args(["--output-dir", temp_dir.path().to_str().unwrap(), "--strict"])
        .assert()
        .code(3);

    assert!(csv_files(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_strict_write_failure_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let mock_server = MockServer::start().await;
    mount_status(&mock_server, ResponseTemplate::new(200).set_body_json(one_alert())).await;

    netcool_cmd_with_base_url(&mock_server.uri())
        .args(["--output-dir", blocker.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to write CSV file"));

    netcool_cmd_with_base_url(&mock_server.uri())
        .args(["--output-dir", blocker.to_str().unwrap(), "--strict"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to save alerts"));
}

#[test]
fn test_missing_base_url_is_config_error() {
    netcool_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}

#[test]
fn test_missing_credentials_is_config_error() {
    netcool_cmd()
        .env_remove("NETCOOL_USERNAME")
        .env_remove("NETCOOL_PASSWORD")
        .env("NETCOOL_BASE_URL", "https://netcool:8443")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Credentials are required"));
}

#[test]
fn test_zero_timeout_is_config_error() {
    netcool_cmd_with_base_url("https://netcool:8443")
        .args(["--timeout", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timeout"));
}

#[test]
fn test_invalid_tls_mode_env_is_config_error() {
    netcool_cmd_with_base_url("https://netcool:8443")
        .env("NETCOOL_TLS_MODE", "sslv3")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("NETCOOL_TLS_MODE"));
}

#[test]
fn test_non_http_base_url_is_config_error() {
    netcool_cmd_with_base_url("ftp://netcool:21")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}

#[tokio::test]
async fn test_profile_file_supplies_connection() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("exports");
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .and(query_param("filter", "Severity > 3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_alert()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config_path = temp_dir.path().join("profiles.json");
    let profiles = json!({
        "profiles": {
            "lab": {
                "base_url": mock_server.uri(),
                "username": TEST_USER,
                "password": TEST_PASSWORD,
                "tls_mode": "legacy",
                "timeout_seconds": 10,
                "filter": "Severity > 3",
                "output_dir": out_dir.to_str().unwrap()
            }
        }
    });
    fs::write(&config_path, serde_json::to_string_pretty(&profiles).unwrap()).unwrap();

    netcool_cmd()
        .env_remove("NETCOOL_USERNAME")
        .env_remove("NETCOOL_PASSWORD")
        .args([
            "--config-path",
            config_path.to_str().unwrap(),
            "--profile",
            "lab",
            "--strict",
        ])
        .assert()
        .success();

    assert_eq!(csv_files(&out_dir).len(), 1);
}

#[tokio::test]
async fn test_env_overrides_profile() {
    let temp_dir = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .and(query_param("filter", "Severity > 4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rowset": {"rows": []}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config_path = temp_dir.path().join("profiles.json");
    let profiles = json!({
        "profiles": {
            "lab": {"base_url": "http://127.0.0.1:9", "filter": "Severity > 3"}
        }
    });
    fs::write(&config_path, profiles.to_string()).unwrap();

    netcool_cmd()
        .env("NETCOOL_CONFIG_PATH", config_path.to_str().unwrap())
        .env("NETCOOL_PROFILE", "lab")
        .env("NETCOOL_BASE_URL", mock_server.uri())
        .env("NETCOOL_FILTER", "Severity > 4")
        .args(["--output-dir", temp_dir.path().to_str().unwrap(), "--strict"])
        .assert()
        .success();
}

#[test]
fn test_unknown_profile_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("profiles.json");
    fs::write(&config_path, r#"{"profiles": {}}"#).unwrap();

    netcool_cmd()
        .args([
            "--config-path",
            config_path.to_str().unwrap(),
            "--profile",
            "missing",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing"));
}
