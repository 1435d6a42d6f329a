//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read connection settings from flags or their environment variables.
//!
//! Non-responsibilities:
//! - Does not validate settings (see `netcool_config::ConfigLoader::build`).
//! - Does not run the export (see `export` module).

use clap::Parser;
use netcool_config::TlsMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "netcool-export")]
#[command(
    about = "Export Netcool objectserver alerts to a timestamped CSV file",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  netcool-export --base-url https://netcool:8443 -u root -p secret\n  netcool-export --profile prod --tls-mode legacy\n  netcool-export --filter 'Severity >= 4' --output-dir /var/exports\n  netcool-export --output-file alerts.csv --strict\n"
)]
pub struct Cli {
    /// Base URL of the objectserver REST API (e.g., https://netcool:8443)
    #[arg(short, long, env = "NETCOOL_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for HTTP basic authentication
    #[arg(short, long, env = "NETCOOL_USERNAME")]
    pub username: Option<String>,

    /// Password for HTTP basic authentication
    #[arg(short, long, env = "NETCOOL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// TLS posture: verify, insecure (no certificate checks), or legacy
    /// (no certificate checks, older protocol versions allowed).
    ///
    /// Can also be set via NETCOOL_TLS_MODE.
    #[arg(long, value_name = "MODE")]
    pub tls_mode: Option<TlsMode>,

    /// Request timeout in seconds (1-3600).
    ///
    /// Can also be set via NETCOOL_TIMEOUT.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// alerts.status filter expression (default: "Severity > 0").
    ///
    /// Can also be set via NETCOOL_FILTER.
    #[arg(long, allow_hyphen_values = true)]
    pub filter: Option<String>,

    /// Directory for the timestamped CSV file (default: current directory).
    ///
    /// Can also be set via NETCOOL_OUTPUT_DIR.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write to this exact path instead of a timestamped file name
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Profile name to load from the profile file
    #[arg(long, env = "NETCOOL_PROFILE")]
    pub profile: Option<String>,

    /// Path to a JSON profile file
    #[arg(long, env = "NETCOOL_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Exit non-zero when the fetch or the file write fails
    #[arg(long)]
    pub strict: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}
