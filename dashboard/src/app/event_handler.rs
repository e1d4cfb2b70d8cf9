//! # Event Handler
//!
//! Applies async task results to application state. This is the single place
//! where fetched data, login outcomes, and update acknowledgements become
//! visible state, and it only ever runs on the rendering thread (called from
//! [`crate::app::App::on_tick`]).
//!
//! Staleness rule: a result is applied only if the screen that issued it is
//! still current (same screen, same entry-cycle seq). Anything else is
//! discarded as a no-op, so a screen abandoned mid-fetch never has its
//! replacement overwritten.

use shared::{LoginResponse, Project, Report, UpdateAck};

use crate::app::state::{ListView, LoginPhase, Screen};
use crate::app::{App, AppEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => {
                self.handle_login_result(result);
            }
            AppEvent::ProjectsLoaded { seq, result } => {
                self.handle_projects_loaded(seq, result);
            }
            AppEvent::ReportsLoaded { seq, result } => {
                self.handle_reports_loaded(seq, result);
            }
            AppEvent::ReportUpdated { report_id, result } => {
                self.handle_report_updated(report_id, result);
            }
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<LoginResponse, String>) {
        tracing::info!(success = result.is_ok(), "Processing login result");

        let mut state = self.state.write();

        // Only a form still in Submitting is waiting for this result
        if state.login.phase != LoginPhase::Submitting {
            tracing::debug!("Discarding login result: form no longer submitting");
            return;
        }
        state.login.phase = LoginPhase::Idle;

        match result {
            Ok(response) if response.is_official() => {
                let token = response.token.unwrap_or_default();
                let role = response.role.unwrap_or_default();
                state.session.set(token, role);
                state.login.error = None;
                state.login.password.clear();
                state.current_screen = Screen::Dashboard;
                tracing::info!("Official authenticated, entering dashboard");
            }
            Ok(response) => {
                // Wrong role or missing token: show the server's message if it
                // sent one, otherwise the generic rejection
                state.session.clear();
                state.login.error = Some(
                    response
                        .msg
                        .unwrap_or_else(|| "Invalid credentials / not an official".to_string()),
                );
            }
            Err(message) => {
                state.session.clear();
                state.login.error = Some(message);
            }
        }
    }

    fn handle_projects_loaded(&mut self, seq: u64, result: Result<Vec<Project>, String>) {
        let mut state = self.state.write();

        if state.current_screen != Screen::Projects || !state.projects.accepts(seq) {
            tracing::debug!(seq = seq, "Discarding stale project fetch result");
            return;
        }

        state.projects.view = ListView::from_fetch(result);
    }

    fn handle_reports_loaded(&mut self, seq: u64, result: Result<Vec<Report>, String>) {
        let mut state = self.state.write();

        if state.current_screen != Screen::Reports || !state.reports.accepts(seq) {
            tracing::debug!(seq = seq, "Discarding stale report fetch result");
            return;
        }

        state.reports.view = ListView::from_fetch(result);
        // Authoritative statuses arrived; stale row drafts would otherwise
        // resubmit an old selection
        state.status_drafts.clear();
    }

    fn handle_report_updated(&mut self, report_id: i64, result: Result<UpdateAck, String>) {
        let reload = {
            let mut state = self.state.write();

            if state.current_screen != Screen::Reports {
                tracing::debug!(report_id = report_id, "Discarding update result: screen left");
                return;
            }

            match result {
                Ok(ack) => {
                    tracing::info!(
                        report_id = report_id,
                        msg = ack.msg.as_deref().unwrap_or(""),
                        "Report updated, refetching authoritative list"
                    );
                    state.reports.notice = Some("Updated. Refreshing…".to_string());
                    true
                }
                Err(message) => {
                    // Keep whatever is rendered; a visibly stale list beats a
                    // falsely updated one
                    state.reports.notice = Some(format!("Error: {}", message));
                    false
                }
            }
        };

        if reload {
            crate::app::tasks::reports::fetch_reports(self.state.clone(), self.event_tx());
        }
    }
}
