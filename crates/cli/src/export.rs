//! Alert export orchestration.
//!
//! Responsibilities:
//! - Build the client from configuration, fetch alerts, save them as CSV.
//! - Resolve the timestamped output path.
//! - Log every outcome, including "nothing to save".
//!
//! Does NOT handle:
//! - Mapping failures to exit codes (see `main` and `error`).
//!
//! Invariants:
//! - Zero records never create a file, whether the fetch failed or returned nothing.
//! - A failed fetch is still followed by the save step with zero records.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use netcool_client::{AlertRecord, ClientError, FetchOutcome, NetcoolClient};
use netcool_config::Config;
use netcool_config::constants::{OUTPUT_FILE_PREFIX, OUTPUT_TIMESTAMP_FORMAT};
use thiserror::Error;
use tracing::{error, info};

use crate::formatters::{build_alerts_csv, write_to_file};

/// Errors surfaced by [`run_export`]. They are already logged when returned.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to fetch alerts")]
    Fetch(#[source] ClientError),

    #[error("Failed to save alerts to {path}: {reason}")]
    Save { path: PathBuf, reason: String },
}

/// Result of the save step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written { path: PathBuf, rows: usize },
    NothingToSave,
    Failed { path: PathBuf, reason: String },
}

/// Default file name for an export started at `now`.
pub fn timestamped_file_name(now: DateTime<Local>) -> String {
    format!(
        "{}{}.csv",
        OUTPUT_FILE_PREFIX,
        now.format(OUTPUT_TIMESTAMP_FORMAT)
    )
}

/// Where to write: `output_file` if given, else a timestamped name in `output_dir`.
pub fn resolve_output_path(output_file: Option<&Path>, output_dir: &Path) -> PathBuf {
    match output_file {
        Some(path) => path.to_path_buf(),
        None => output_dir.join(timestamped_file_name(Local::now())),
    }
}

/// Write records to `path` as CSV.
///
/// Never fails: errors are logged and returned as [`SaveOutcome::Failed`].
pub fn save_alerts_csv(records: &[AlertRecord], path: &Path) -> SaveOutcome {
    if records.is_empty() {
        info!("No alerts to save");
        return SaveOutcome::NothingToSave;
    }

    let result = build_alerts_csv(records).and_then(|bytes| write_to_file(&bytes, path));

    match result {
        Ok(()) => {
            info!(
                path = %path.display(),
                rows = records.len(),
                "Wrote {} alerts to {}",
                records.len(),
                path.display()
            );
            SaveOutcome::Written {
                path: path.to_path_buf(),
                rows: records.len(),
            }
        }
        Err(e) => {
            let reason = format!("{:#}", e);
            error!(path = %path.display(), error = %reason, "Failed to write CSV file");
            SaveOutcome::Failed {
                path: path.to_path_buf(),
                reason,
            }
        }
    }
}

/// Fetch alerts and save them.
///
/// Both steps always run; the first failure is returned afterwards.
pub async fn run_export(
    config: &Config,
    output_file: Option<&Path>,
) -> Result<SaveOutcome, ExportError> {
    let client = NetcoolClient::builder()
        .from_config(config)
        .build()
        .map_err(|e| {
            error!(error = %e, "Failed to build HTTP client");
            ExportError::Fetch(e)
        })?;

    let outcome = client.fetch_alerts().await;

    let path = resolve_output_path(output_file, &config.export.output_dir);
    let saved = save_alerts_csv(outcome.records(), &path);

    if let FetchOutcome::Failed(err) = outcome {
        return Err(ExportError::Fetch(err));
    }

    match saved {
        SaveOutcome::Failed { path, reason } => Err(ExportError::Save { path, reason }),
        other => Ok(other),
    }
}
