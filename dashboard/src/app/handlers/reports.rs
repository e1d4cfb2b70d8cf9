//! # Report Handlers
//!
//! Handlers for the per-row status controls on the reports screen.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use shared::REPORT_STATUS_PENDING;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Record the locally selected candidate status for a report row. Nothing is
/// sent until the update button is clicked.
///
/// Internal handler function - use
/// [`crate::app::App::handle_status_draft_change`] instead.
pub(crate) fn handle_status_draft_change(
    state: Arc<RwLock<AppState>>,
    report_id: i64,
    candidate: String,
) {
    let mut state = state.write();
    state.status_drafts.insert(report_id, candidate);
}

/// Handle update button click for a report row.
///
/// Sends the locally selected candidate status (not necessarily server state)
/// with the current token. Reconciliation happens in the event handler: a
/// success reloads the whole list, a failure leaves the rendered list alone.
///
/// Internal handler function - use
/// [`crate::app::App::handle_update_status_click`] instead.
pub(crate) fn handle_update_status_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    report_id: i64,
) {
    let (api, token, candidate) = {
        let mut state = state.write();
        // An untouched row falls back to its currently rendered status
        let candidate = state
            .status_drafts
            .get(&report_id)
            .cloned()
            .or_else(|| {
                state
                    .reports
                    .view
                    .items()
                    .iter()
                    .find(|report| report.id == report_id)
                    .map(|report| report.status.clone())
                    .filter(|status| !status.is_empty())
            })
            .unwrap_or_else(|| REPORT_STATUS_PENDING.to_string());
        state.reports.notice = Some(format!("Updating report #{}…", report_id));
        (
            state.api.clone(),
            state.session.token().map(str::to_owned),
            candidate,
        )
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.update_report_status(token, report_id, candidate).await;
        let _ = tx.send(AppEvent::ReportUpdated { report_id, result }).await;
    });
}
