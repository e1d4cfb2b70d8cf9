//! # Authentication Handlers
//!
//! Handlers for login and logout actions.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, LoginForm, LoginPhase, Screen};
use crate::utils::validation;

/// Handle login button click.
///
/// Inputs are whitespace-trimmed before validation; empty fields show a
/// validation message synchronously and never issue a network call. Valid
/// input moves the form to `Submitting` and dispatches the login call.
///
/// Internal handler function - use [`crate::app::App::handle_login_click`]
/// instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let email = email.trim().to_string();
    let password = password.trim().to_string();

    let check = validation::validate_credentials(&email, &password);
    if !check.is_valid {
        let mut state = state.write();
        state.login.phase = LoginPhase::Idle;
        state.login.error = check.error;
        return;
    }

    let api = {
        let mut state = state.write();
        state.login.phase = LoginPhase::Submitting;
        state.login.error = None;
        state.api.clone()
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.login(email, password).await;
        let _ = tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle logout: clear token and role together and return to the login
/// screen. No async component.
///
/// Internal handler function - use [`crate::app::App::handle_logout`] instead.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.session.clear();
    state.current_screen = Screen::Login;
    state.login = LoginForm::default();
    tracing::info!("Logged out, session cleared");
}
