//! netcool-export - export Netcool objectserver alerts to CSV.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load and validate configuration.
//! - Run one fetch-and-save pass and choose the exit code.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Scheduling or repeated runs.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - Precedence is profile file, then environment, then CLI flags.

mod args;
mod error;
mod export;
mod formatters;

use std::time::Duration;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use export::SaveOutcome;
use netcool_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    init_tracing(cli.quiet);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match export::run_export(&config, cli.output_file.as_deref()).await {
        Ok(SaveOutcome::Written { path, rows }) => {
            tracing::debug!(path = %path.display(), rows, "Export complete");
            ExitCode::Success
        }
        Ok(_) => ExitCode::Success,
        Err(e) if cli.strict => {
            let e = anyhow::Error::new(e);
            eprintln!("{:#}", e);
            e.exit_code()
        }
        // Already logged; failures are tolerated without --strict.
        Err(_) => ExitCode::Success,
    };

    std::process::exit(exit_code.as_i32());
}

/// Install the stdout log subscriber. `RUST_LOG` overrides the default level.
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();
}

/// Treat blank flag or env values as unset.
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(profile_name) = non_blank(&cli.profile) {
        loader = loader.with_profile_name(profile_name);
    }

    // Profile first so environment variables override it.
    loader = loader.from_profile()?.from_env()?;

    if let Some(url) = non_blank(&cli.base_url) {
        loader = loader.with_base_url(url);
    }
    if let Some(username) = non_blank(&cli.username) {
        loader = loader.with_username(username);
    }
    if let Some(password) = cli.password.clone().filter(|p| !p.is_empty()) {
        loader = loader.with_password(password);
    }
    if let Some(mode) = cli.tls_mode {
        loader = loader.with_tls_mode(mode);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(ref filter) = cli.filter {
        loader = loader.with_filter(filter.clone());
    }
    if let Some(ref dir) = cli.output_dir {
        loader = loader.with_output_dir(dir.clone());
    }

    Ok(loader.build()?)
}
