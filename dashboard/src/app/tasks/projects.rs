//! # Project Fetch Task

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Start the projects screen entry cycle: reset the pane to loading and fetch
/// the list off the rendering thread.
///
/// Internal task function - use [`crate::app::App::handle_screen_change`]
/// instead.
pub(crate) fn fetch_projects(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    // Snapshot token and bump the cycle seq while the lock is held briefly
    let (api, token, seq) = {
        let mut state = state.write();
        let seq = state.projects.begin_load();
        (
            state.api.clone(),
            state.session.token().map(str::to_owned),
            seq,
        )
    };

    tracing::debug!(seq = seq, "Dispatching project fetch");

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.list_projects(token).await;
        let _ = tx.send(AppEvent::ProjectsLoaded { seq, result }).await;
    });
}
