//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async fetch
//! tasks, and application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Rendering Thread (egui)                     │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains async results every frame      │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - session, screen, per-screen list panes            │   │
//! │  │  - locks held briefly                                │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - one short-lived task per network call                    │
//! │  - login / fetch projects / fetch reports / update report   │
//! │  - results sent back as AppEvent, never applied directly    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Ordering Rule
//!
//! The one hard rule of the system: the session is read on the rendering
//! thread (before a task is spawned), network I/O happens only off it, and
//! every state transition that affects rendering is applied back on it (via
//! the event channel drained in [`App::on_tick`]). Nothing is cancellable; a
//! result whose screen has since been replaced is discarded by the event
//! handler (see [`event_handler`]).

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;
mod window_app;

pub use events::AppEvent;
pub use state::*;
pub use window_app::DashboardApp;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::core::ApiService;
use crate::services::api::ApiClient;

/// Main application orchestrator.
///
/// Owns the shared state and both ends of the event channel. UI code calls
/// the `handle_*` methods in response to user actions and reads state for
/// rendering; async tasks send completions into the channel.
pub struct App {
    /// Thread-safe shared application state
    pub state: Arc<RwLock<AppState>>,
    /// Channel receiver for async task results, polled in [`App::on_tick`]
    pub event_rx: Receiver<AppEvent>,
    /// Channel sender cloned into every spawned task
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application against the real backend client.
    pub fn new() -> Self {
        Self::with_service(Arc::new(ApiClient::new()))
    }

    /// Create the application with an injected API service. Production code
    /// passes [`ApiClient`]; tests pass a mock.
    pub fn with_service(api: Arc<dyn ApiService>) -> Self {
        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(AppState::new(api))),
            event_rx,
            event_tx,
        };

        tracing::info!("App state initialized - event channel created");
        app
    }

    /// Called every frame to apply async task results.
    ///
    /// Non-blocking: drains whatever is in the channel with `try_recv` and
    /// applies each event to state. Safe to call at any frequency.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handle one async event result.
    ///
    /// Delegates to the event_handler module for processing.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle login button click
    pub fn handle_login_click(&mut self, email: String, password: String) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone(), email, password);
    }

    /// Handle logout button click
    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(self.state.clone());
    }

    /// Handle screen change (auth-guarded; entering a list screen restarts
    /// its entry cycle)
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen);
    }

    /// Record the locally selected candidate status for a report row
    pub fn handle_status_draft_change(&mut self, report_id: i64, candidate: String) {
        handlers::reports::handle_status_draft_change(self.state.clone(), report_id, candidate);
    }

    /// Handle update button click for a report row
    pub fn handle_update_status_click(&mut self, report_id: i64) {
        handlers::reports::handle_update_status_click(self.state.clone(), self.event_tx.clone(), report_id);
    }

    /// Get the event sender (used by the event handler to restart fetches).
    pub(crate) fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::{LoginResponse, Project, Report, UpdateAck, REPORT_STATUS_RESOLVED};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Recording mock for [`ApiService`]: counts calls, captures the token,
    /// and replays configured responses. `update_report_status` mutates the
    /// stored report list so a follow-up fetch returns authoritative state.
    struct MockApi {
        login_calls: AtomicUsize,
        project_calls: AtomicUsize,
        report_calls: AtomicUsize,
        update_calls: AtomicUsize,
        last_token: Mutex<Option<String>>,
        login_response: Mutex<Result<LoginResponse, String>>,
        projects: Mutex<Result<Vec<Project>, String>>,
        reports: Mutex<Result<Vec<Report>, String>>,
        update_result: Mutex<Result<UpdateAck, String>>,
    }

    impl MockApi {
        fn new() -> Self {
            Self {
                login_calls: AtomicUsize::new(0),
                project_calls: AtomicUsize::new(0),
                report_calls: AtomicUsize::new(0),
                update_calls: AtomicUsize::new(0),
                last_token: Mutex::new(None),
                login_response: Mutex::new(Ok(official_login())),
                projects: Mutex::new(Ok(vec![])),
                reports: Mutex::new(Ok(vec![])),
                update_result: Mutex::new(Ok(UpdateAck {
                    msg: Some("updated".to_string()),
                })),
            }
        }

        fn total_calls(&self) -> usize {
            self.login_calls.load(Ordering::SeqCst)
                + self.project_calls.load(Ordering::SeqCst)
                + self.report_calls.load(Ordering::SeqCst)
                + self.update_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl crate::core::ApiService for MockApi {
        async fn login(&self, _email: String, _password: String) -> Result<LoginResponse, String> {
            self.login_calls.fetch_add(1, Ordering::SeqCst);
            self.login_response.lock().clone()
        }

        async fn list_projects(&self, token: Option<String>) -> Result<Vec<Project>, String> {
            self.project_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_token.lock() = token;
            self.projects.lock().clone()
        }

        async fn list_reports(&self, token: Option<String>) -> Result<Vec<Report>, String> {
            self.report_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_token.lock() = token;
            self.reports.lock().clone()
        }

        async fn update_report_status(
            &self,
            token: Option<String>,
            report_id: i64,
            new_status: String,
        ) -> Result<UpdateAck, String> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_token.lock() = token;
            let result = self.update_result.lock().clone();
            if result.is_ok() {
                if let Ok(reports) = self.reports.lock().as_mut() {
                    if let Some(report) = reports.iter_mut().find(|r| r.id == report_id) {
                        report.status = new_status;
                    }
                }
            }
            result
        }
    }

    fn official_login() -> LoginResponse {
        LoginResponse {
            token: Some("t1".to_string()),
            role: Some("official".to_string()),
            msg: None,
        }
    }

    fn report(id: i64, status: &str) -> Report {
        Report {
            id,
            user_id: Some(42),
            report_type: "Pothole".to_string(),
            location: "5th Ave".to_string(),
            description: "Deep pothole near the crossing".to_string(),
            timestamp: "2024-03-01 10:22".to_string(),
            status: status.to_string(),
        }
    }

    fn project(id: i64, title: &str) -> Project {
        Project {
            id: Some(id),
            title: title.to_string(),
            ..Project::default()
        }
    }

    fn app_with(api: &Arc<MockApi>) -> App {
        App::with_service(api.clone() as Arc<dyn crate::core::ApiService>)
    }

    /// Log in through the real flow: click, then pump events (applying any
    /// leftover fetch results along the way) until the login result lands.
    async fn login(app: &mut App) {
        app.handle_login_click("o@city.gov".to_string(), "x".to_string());
        loop {
            let event = app.event_rx.recv().await.expect("login event");
            let done = matches!(event, AppEvent::LoginResult(_));
            app.handle_event(event);
            if done {
                break;
            }
        }
    }

    /// Await the next event and apply it.
    async fn pump_one(app: &mut App) {
        let event = app.event_rx.recv().await.expect("pending event");
        app.handle_event(event);
    }

    // ========== Screen Tests ==========

    #[test]
    fn test_screen_all_returns_correct_order() {
        let screens = Screen::all();

        assert_eq!(screens.len(), 4);
        assert_eq!(screens[0], Screen::Login);
        assert_eq!(screens[1], Screen::Dashboard);
        assert_eq!(screens[2], Screen::Projects);
        assert_eq!(screens[3], Screen::Reports);
    }

    #[test]
    fn test_screen_title() {
        assert_eq!(Screen::Login.title(), "Officials Login");
        assert_eq!(Screen::Dashboard.title(), "Dashboard");
        assert_eq!(Screen::Projects.title(), "Projects");
        assert_eq!(Screen::Reports.title(), "Reports");
    }

    #[test]
    fn test_protected_screens() {
        assert!(!AppState::requires_auth(Screen::Login));
        assert!(AppState::requires_auth(Screen::Dashboard));
        assert!(AppState::requires_auth(Screen::Projects));
        assert!(AppState::requires_auth(Screen::Reports));
    }

    // ========== Initial State Tests ==========

    #[test]
    fn test_initial_state_is_unauthenticated_login() {
        let api = Arc::new(MockApi::new());
        let app = app_with(&api);
        let state = app.state.read();

        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.is_authenticated());
        assert!(state.session.token().is_none());
        assert!(state.session.role().is_none());
        assert_eq!(state.login, LoginForm::default());
        assert_eq!(state.projects.view, ListView::Empty);
        assert_eq!(state.reports.view, ListView::Empty);
    }

    // ========== Login Validation Tests ==========

    #[test]
    fn test_empty_credentials_issue_no_network_call() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(&api);

        app.handle_login_click(String::new(), String::new());

        let state = app.state.read();
        assert_eq!(state.login.phase, LoginPhase::Idle);
        assert_eq!(
            state.login.error.as_deref(),
            Some("Email & password are required")
        );
        assert_eq!(api.total_calls(), 0);
    }

    #[test]
    fn test_whitespace_credentials_issue_no_network_call() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(&api);

        app.handle_login_click("   ".to_string(), "\t".to_string());

        let state = app.state.read();
        assert_eq!(state.login.phase, LoginPhase::Idle);
        assert!(state.login.error.is_some());
        assert_eq!(api.total_calls(), 0);
    }

    // ========== Login Flow Tests ==========

    #[tokio::test]
    async fn test_login_success_authenticates_and_enters_dashboard() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(&api);

        app.handle_login_click("o@city.gov".to_string(), "x".to_string());
        {
            let state = app.state.read();
            assert_eq!(state.login.phase, LoginPhase::Submitting);
        }
        pump_one(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
        assert_eq!(state.session.token(), Some("t1"));
        assert_eq!(state.session.role(), Some("official"));
        assert!(state.login.error.is_none());
        assert_eq!(state.login.phase, LoginPhase::Idle);
        assert_eq!(api.login_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_login_trims_credentials_before_submitting() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(&api);

        app.handle_login_click("  o@city.gov  ".to_string(), " x ".to_string());
        pump_one(&mut app).await;

        assert_eq!(app.state.read().current_screen, Screen::Dashboard);
    }

    #[tokio::test]
    async fn test_login_wrong_role_shows_server_message() {
        let api = Arc::new(MockApi::new());
        *api.login_response.lock() = Ok(LoginResponse {
            token: Some("t2".to_string()),
            role: Some("citizen".to_string()),
            msg: Some("Not an official account".to_string()),
        });
        let mut app = app_with(&api);

        login(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.is_authenticated());
        assert_eq!(state.login.error.as_deref(), Some("Not an official account"));
    }

    #[tokio::test]
    async fn test_login_missing_token_shows_generic_message() {
        let api = Arc::new(MockApi::new());
        *api.login_response.lock() = Ok(LoginResponse::default());
        let mut app = app_with(&api);

        login(&mut app).await;

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert_eq!(
            state.login.error.as_deref(),
            Some("Invalid credentials / not an official")
        );
    }

    #[tokio::test]
    async fn test_login_network_error_shows_transport_message() {
        let api = Arc::new(MockApi::new());
        *api.login_response.lock() = Err("Network error: connection refused".to_string());
        let mut app = app_with(&api);

        login(&mut app).await;

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert_eq!(
            state.login.error.as_deref(),
            Some("Network error: connection refused")
        );
    }

    #[tokio::test]
    async fn test_failed_login_can_resubmit() {
        let api = Arc::new(MockApi::new());
        *api.login_response.lock() = Err("Network error: timeout".to_string());
        let mut app = app_with(&api);

        login(&mut app).await;
        assert!(!app.state.read().is_authenticated());

        *api.login_response.lock() = Ok(official_login());
        login(&mut app).await;

        assert_eq!(app.state.read().current_screen, Screen::Dashboard);
        assert_eq!(api.login_calls.load(Ordering::SeqCst), 2);
    }

    // ========== Navigation Tests ==========

    #[test]
    fn test_protected_screen_redirects_when_unauthenticated() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(&api);

        app.handle_screen_change(Screen::Projects);

        assert_eq!(app.state.read().current_screen, Screen::Login);
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_returns_to_login() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(&api);

        for screen in [Screen::Dashboard, Screen::Projects, Screen::Reports] {
            login(&mut app).await;
            app.handle_screen_change(screen);

            app.handle_logout();

            let state = app.state.read();
            assert_eq!(state.current_screen, Screen::Login);
            assert!(state.session.token().is_none());
            assert!(state.session.role().is_none());
        }
    }

    // ========== List Screen Entry Cycle Tests ==========

    #[tokio::test]
    async fn test_projects_entry_loads_then_renders_in_server_order() {
        let api = Arc::new(MockApi::new());
        *api.projects.lock() = Ok(vec![
            project(3, "Bridge repair"),
            project(1, "Road widening"),
        ]);
        let mut app = app_with(&api);
        login(&mut app).await;

        app.handle_screen_change(Screen::Projects);
        {
            let state = app.state.read();
            assert_eq!(state.projects.view, ListView::Loading);
            assert_eq!(state.projects.status_line("project"), "Loading projects…");
        }
        pump_one(&mut app).await;

        let state = app.state.read();
        let items = state.projects.view.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Bridge repair");
        assert_eq!(items[1].title, "Road widening");
        assert_eq!(state.projects.status_line("project"), "Loaded 2 project(s)");
        // Fetch carried the session token
        assert_eq!(api.last_token.lock().as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn test_empty_fetch_shows_empty_indicator() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(&api);
        login(&mut app).await;

        app.handle_screen_change(Screen::Projects);
        pump_one(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.projects.view, ListView::Empty);
        assert_eq!(state.projects.status_line("project"), "No projects found");
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_error_and_no_items() {
        let api = Arc::new(MockApi::new());
        *api.reports.lock() = Err("Network error: connection refused".to_string());
        let mut app = app_with(&api);
        login(&mut app).await;

        app.handle_screen_change(Screen::Reports);
        pump_one(&mut app).await;

        let state = app.state.read();
        assert!(matches!(state.reports.view, ListView::Error(_)));
        assert!(state.reports.view.items().is_empty());
        assert_eq!(
            state.reports.status_line("report"),
            "Error: Network error: connection refused"
        );
    }

    #[tokio::test]
    async fn test_reentry_restarts_cycle_without_caching() {
        let api = Arc::new(MockApi::new());
        *api.reports.lock() = Ok(vec![report(7, "pending")]);
        let mut app = app_with(&api);
        login(&mut app).await;

        app.handle_screen_change(Screen::Reports);
        pump_one(&mut app).await;
        assert_eq!(app.state.read().reports.view.items().len(), 1);

        app.handle_screen_change(Screen::Dashboard);
        app.handle_screen_change(Screen::Reports);
        assert_eq!(app.state.read().reports.view, ListView::Loading);
        pump_one(&mut app).await;

        assert_eq!(api.report_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_stale_fetch_result_is_discarded() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(&api);
        login(&mut app).await;

        app.handle_screen_change(Screen::Projects);
        pump_one(&mut app).await;
        app.handle_screen_change(Screen::Dashboard);
        app.handle_screen_change(Screen::Projects);

        // A result from the first visit (seq 1) arrives after re-entry bumped
        // the pane to seq 2: it must not overwrite the in-flight load
        app.handle_event(AppEvent::ProjectsLoaded {
            seq: 1,
            result: Ok(vec![project(9, "Stale")]),
        });
        assert_eq!(app.state.read().projects.view, ListView::Loading);
    }

    #[tokio::test]
    async fn test_fetch_result_for_replaced_screen_is_discarded() {
        let api = Arc::new(MockApi::new());
        *api.projects.lock() = Ok(vec![project(1, "Bridge repair")]);
        let mut app = app_with(&api);
        login(&mut app).await;

        app.handle_screen_change(Screen::Projects);
        app.handle_screen_change(Screen::Dashboard);
        pump_one(&mut app).await;

        // Applied to nothing: the projects pane was abandoned mid-fetch
        assert_eq!(app.state.read().projects.view, ListView::Loading);
        assert_eq!(app.state.read().current_screen, Screen::Dashboard);
    }

    // ========== Report Update Tests ==========

    #[tokio::test]
    async fn test_update_success_reloads_authoritative_list() {
        let api = Arc::new(MockApi::new());
        *api.reports.lock() = Ok(vec![report(7, "pending")]);
        let mut app = app_with(&api);
        login(&mut app).await;

        app.handle_screen_change(Screen::Reports);
        pump_one(&mut app).await;

        app.handle_status_draft_change(7, REPORT_STATUS_RESOLVED.to_string());
        app.handle_update_status_click(7);
        pump_one(&mut app).await; // ReportUpdated -> triggers reload
        pump_one(&mut app).await; // ReportsLoaded with authoritative state

        let state = app.state.read();
        let items = state.reports.view.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 7);
        assert_eq!(items[0].status, "resolved");
        assert_eq!(api.update_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.report_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_update_twice_is_idempotent() {
        let api = Arc::new(MockApi::new());
        *api.reports.lock() = Ok(vec![report(7, "pending")]);
        let mut app = app_with(&api);
        login(&mut app).await;

        app.handle_screen_change(Screen::Reports);
        pump_one(&mut app).await;

        for _ in 0..2 {
            app.handle_status_draft_change(7, REPORT_STATUS_RESOLVED.to_string());
            app.handle_update_status_click(7);
            pump_one(&mut app).await;
            pump_one(&mut app).await;
        }

        let state = app.state.read();
        let items = state.reports.view.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status, "resolved");
        assert_eq!(api.update_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_update_failure_preserves_rendered_list() {
        let api = Arc::new(MockApi::new());
        *api.reports.lock() = Ok(vec![report(7, "pending")]);
        *api.update_result.lock() = Err("Network error: timeout".to_string());
        let mut app = app_with(&api);
        login(&mut app).await;

        app.handle_screen_change(Screen::Reports);
        pump_one(&mut app).await;

        app.handle_update_status_click(7);
        pump_one(&mut app).await;

        let state = app.state.read();
        // No reload, no local mutation: the list stands as rendered
        assert_eq!(state.reports.view.items().len(), 1);
        assert_eq!(state.reports.view.items()[0].status, "pending");
        assert_eq!(
            state.reports.status_line("report"),
            "Error: Network error: timeout"
        );
        assert_eq!(api.report_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_untouched_row_submits_its_rendered_status() {
        let api = Arc::new(MockApi::new());
        *api.reports.lock() = Ok(vec![report(7, "resolved")]);
        let mut app = app_with(&api);
        login(&mut app).await;

        app.handle_screen_change(Screen::Reports);
        pump_one(&mut app).await;

        // No draft selected: the update sends the row's current status
        app.handle_update_status_click(7);
        pump_one(&mut app).await;
        pump_one(&mut app).await;

        assert_eq!(app.state.read().reports.view.items()[0].status, "resolved");
    }
}
