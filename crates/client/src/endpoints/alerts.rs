//! Alert endpoints for the objectserver REST API.
//!
//! # What this module handles:
//! - Building the `alerts/status` URL with `collist` and `filter`
//! - One authenticated GET and JSON deserialization of the rowset
//!
//! # What this module does NOT handle:
//! - Logging the outcome or swallowing failures (see [`crate::client::NetcoolClient::fetch_alerts`])
//! - Retries or pagination; the table is read in a single request

use reqwest::Client;
use reqwest::header::ACCEPT;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::endpoints::url_encoding::encode_query_value;
use crate::error::{ClientError, Result};
use crate::models::{AlertRecord, AlertStatusResponse, Column, column_list};
use netcool_config::Credentials;
use netcool_config::constants::ALERTS_STATUS_PATH;

/// Longest error body kept in [`ClientError::ApiError`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Full request URL for `alerts.status` with the given columns and filter.
pub fn alerts_status_url(base_url: &str, columns: &[Column], filter: &str) -> String {
    format!(
        "{}{}?collist={}&filter={}",
        base_url,
        ALERTS_STATUS_PATH,
        encode_query_value(&column_list(columns)),
        encode_query_value(filter)
    )
}

/// Read rows of `alerts.status`.
///
/// Returns the records in server order. A body without `rowset` or
/// `rowset.rows` yields an empty list.
pub async fn fetch_alert_status(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    columns: &[Column],
    filter: &str,
) -> Result<Vec<AlertRecord>> {
    let url = alerts_status_url(base_url, columns, filter);
    debug!(url = %url, "Fetching alerts.status");

    let response = client
        .get(&url)
        .basic_auth(
            &credentials.username,
            Some(credentials.password.expose_secret()),
        )
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| ClientError::from_send_error(e, &url))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        let message = truncate_body(body.trim(), status.canonical_reason());

        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url,
            message,
        });
    }

    let body: AlertStatusResponse = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse alerts.status response: {}", e))
    })?;

    if let Some(affected) = body.rowset.as_ref().and_then(|r| r.affected_rows) {
        debug!(affected_rows = affected, "alerts.status rowset received");
    }

    Ok(body.into_rows())
}

fn truncate_body(body: &str, reason: Option<&str>) -> String {
    if body.is_empty() {
        return reason.unwrap_or("empty response body").to_string();
    }
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let mut truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    truncated.push_str("...");
    truncated
}
