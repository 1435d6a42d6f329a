//! Alert models for the `alerts.status` table.
//!
//! # Invariants
//! - `ALERT_COLUMNS` is the only column list requested and exported, in this order.
//! - Fields not in `ALERT_COLUMNS` are dropped while parsing.
//! - A JSON `null` and an absent field are the same thing: `None`.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// A column of `alerts.status` that the exporter reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Node,
    Summary,
    Severity,
    FirstOccurrence,
    LastOccurrence,
    Tally,
    Identifier,
}

/// The fixed column list, in request and CSV header order.
pub const ALERT_COLUMNS: [Column; 7] = [
    Column::Node,
    Column::Summary,
    Column::Severity,
    Column::FirstOccurrence,
    Column::LastOccurrence,
    Column::Tally,
    Column::Identifier,
];

impl Column {
    /// Field name as used by the objectserver and in the CSV header.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Summary => "Summary",
            Self::Severity => "Severity",
            Self::FirstOccurrence => "FirstOccurrence",
            Self::LastOccurrence => "LastOccurrence",
            Self::Tally => "Tally",
            Self::Identifier => "Identifier",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comma-joined column names, as sent in the `collist` query parameter.
pub fn column_list(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// One row of `alerts.status`.
///
/// Values are kept as raw JSON scalars; the objectserver returns strings
/// for text columns and integers for severity, tally and UTC times.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlertRecord {
    #[serde(rename = "Node", default)]
    pub node: Option<Value>,
    #[serde(rename = "Summary", default)]
    pub summary: Option<Value>,
    #[serde(rename = "Severity", default)]
    pub severity: Option<Value>,
    #[serde(rename = "FirstOccurrence", default)]
    pub first_occurrence: Option<Value>,
    #[serde(rename = "LastOccurrence", default)]
    pub last_occurrence: Option<Value>,
    #[serde(rename = "Tally", default)]
    pub tally: Option<Value>,
    #[serde(rename = "Identifier", default)]
    pub identifier: Option<Value>,
}

impl AlertRecord {
    /// Value of `column`, or `None` if the row lacked it.
    pub fn get(&self, column: Column) -> Option<&Value> {
        match column {
            Column::Node => self.node.as_ref(),
            Column::Summary => self.summary.as_ref(),
            Column::Severity => self.severity.as_ref(),
            Column::FirstOccurrence => self.first_occurrence.as_ref(),
            Column::LastOccurrence => self.last_occurrence.as_ref(),
            Column::Tally => self.tally.as_ref(),
            Column::Identifier => self.identifier.as_ref(),
        }
    }
}

/// Envelope returned by `GET /objectserver/restapi/alerts/status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertStatusResponse {
    #[serde(default)]
    pub rowset: Option<Rowset>,
}

/// The `rowset` member of the response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rowset {
    #[serde(default)]
    pub rows: Option<Vec<AlertRecord>>,
    #[serde(rename = "affectedRows", default)]
    pub affected_rows: Option<u64>,
}

impl AlertStatusResponse {
    /// Rows in server order; empty when `rowset` or `rows` is absent.
    pub fn into_rows(self) -> Vec<AlertRecord> {
        self.rowset.and_then(|r| r.rows).unwrap_or_default()
    }
}
