//! # Navigation Handlers
//!
//! Screen switching with the authentication guard and per-visit entry cycles.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks;

/// Handle screen change with authentication guard.
///
/// Entering a list screen restarts that screen's entry cycle from scratch:
/// previous items are dropped, the pane goes to loading, and a fresh fetch is
/// dispatched. There is no caching of results across visits.
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`]
/// instead.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    {
        let mut state = state.write();

        if AppState::requires_auth(screen) && !state.is_authenticated() {
            tracing::info!(
                "Access denied: {} requires authentication, redirecting to login",
                screen.title()
            );
            state.current_screen = Screen::Login;
            return;
        }

        state.current_screen = screen;
    }

    match screen {
        Screen::Projects => tasks::projects::fetch_projects(state, event_tx),
        Screen::Reports => tasks::reports::fetch_reports(state, event_tx),
        Screen::Login | Screen::Dashboard => {}
    }
}
