//! Alerts CSV formatter.
//!
//! Responsibilities:
//! - Render alert records as CSV with a fixed header.
//!
//! Invariants:
//! - Output starts with the UTF-8 byte order mark so spreadsheet tools
//!   detect the encoding.
//! - The header is always `ALERT_COLUMNS`, whatever the server returned.
//! - Records end with CRLF; quoting is applied only where needed.

use anyhow::{Context, Result};
use netcool_client::{ALERT_COLUMNS, AlertRecord};

use crate::formatters::common::format_cell;

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render records as CSV bytes, BOM and header included.
pub fn build_alerts_csv(records: &[AlertRecord]) -> Result<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();
    {
        let mut w = ::csv::WriterBuilder::new()
            .terminator(::csv::Terminator::CRLF)
            .from_writer(&mut buffer);

        w.write_record(ALERT_COLUMNS.iter().map(|c| c.as_str()))
            .context("Failed to write CSV header")?;

        for record in records {
            w.write_record(ALERT_COLUMNS.iter().map(|&c| format_cell(record.get(c))))
                .context("Failed to write CSV record")?;
        }

        w.flush().context("Failed to flush CSV writer")?;
    }

    Ok(buffer)
}
