//! # Report Fetch Task

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Start the reports screen entry cycle: reset the pane to loading and fetch
/// the list off the rendering thread.
///
/// Also re-run after every successful status update, so the screen always
/// reflects authoritative server state instead of a locally patched row.
///
/// Internal task function - use [`crate::app::App::handle_screen_change`]
/// instead.
pub(crate) fn fetch_reports(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api, token, seq) = {
        let mut state = state.write();
        let seq = state.reports.begin_load();
        (
            state.api.clone(),
            state.session.token().map(str::to_owned),
            seq,
        )
    };

    tracing::debug!(seq = seq, "Dispatching report fetch");

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.list_reports(token).await;
        let _ = tx.send(AppEvent::ReportsLoaded { seq, result }).await;
    });
}
