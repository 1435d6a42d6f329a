//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Rendering JSON scalars as cell text.
//! - Atomic file writing.

use anyhow::{Context, Result};
use std::path::Path;

/// Format a JSON value as a cell string.
///
/// - Strings are returned as-is
/// - Numbers and booleans are converted to their JSON text
/// - Null values become empty strings
/// - Arrays and objects are serialized as compact JSON
pub fn format_json_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            serde_json::to_string(v).unwrap_or_default()
        }
    }
}

/// Format an optional JSON value, rendering a missing value as an empty cell.
pub fn format_cell(v: Option<&serde_json::Value>) -> String {
    v.map(format_json_value).unwrap_or_default()
}

/// Write bytes to a file atomically.
///
/// Creates parent directories if needed, writes to a temp file in the same
/// directory, then renames over `path`. The file gets the same permissions
/// as one created with [`std::fs::write`].
pub fn write_to_file(content: &[u8], path: &Path) -> Result<()> {
    use std::fs;
    use std::io::Write;

    // A bare file name has an empty parent.
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut builder = tempfile::Builder::new();
    builder.prefix(".netcool_export");
    // Temp files default to 0600; the umask still applies to this mode.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut temp_file = builder
        .tempfile_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content)
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
