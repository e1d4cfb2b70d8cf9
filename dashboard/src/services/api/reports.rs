//! # Report Endpoints
//!
//! Report listing and per-report status updates.

use shared::{Report, ReportListResponse, UpdateAck, UpdateReportRequest};

use super::client::ApiClient;

/// Fetch all citizen reports.
///
/// Same auth and normalization pattern as
/// [`crate::services::api::projects::list_projects`]: bearer header only when
/// a token exists, and both the bare-array and `{"reports": [...]}` shapes
/// collapse into one `Vec<Report>`.
#[tracing::instrument(skip(client, token), fields(has_token = token.is_some()))]
pub async fn list_reports(
    client: &ApiClient,
    token: Option<String>,
) -> Result<Vec<Report>, String> {
    let start = std::time::Instant::now();

    let mut request = client
        .client
        .get(format!("{}/reports", client.base_url()));
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|e| {
        tracing::warn!(error = %e, "Report fetch network error");
        format!("Network error: {}", e)
    })?;

    let envelope = response.json::<ReportListResponse>().await.map_err(|e| {
        tracing::warn!(error = %e, "Report fetch parse error");
        format!("Failed to parse response: {}", e)
    })?;

    let reports = envelope.into_items();
    tracing::debug!(
        count = reports.len(),
        duration_ms = start.elapsed().as_millis(),
        "Reports fetched"
    );
    Ok(reports)
}

/// Set a report's status.
///
/// `report_id` must be an identifier the caller already holds from a prior
/// listing; there is no client-side existence check. The acknowledgement body
/// is passed through as-is.
#[tracing::instrument(skip(client, token), fields(report_id = report_id, status = %new_status))]
pub async fn update_report_status(
    client: &ApiClient,
    token: Option<String>,
    report_id: i64,
    new_status: String,
) -> Result<UpdateAck, String> {
    let start = std::time::Instant::now();

    let mut request = client
        .client
        .put(format!("{}/reports/update/{}", client.base_url(), report_id))
        .json(&UpdateReportRequest { status: new_status });
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|e| {
        tracing::warn!(error = %e, "Report update network error");
        format!("Network error: {}", e)
    })?;

    let ack = response.json::<UpdateAck>().await.map_err(|e| {
        tracing::warn!(error = %e, "Report update parse error");
        format!("Failed to parse response: {}", e)
    })?;

    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        msg = ack.msg.as_deref().unwrap_or(""),
        "Report update completed"
    );
    Ok(ack)
}
