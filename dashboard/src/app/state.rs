//! # Application State Types
//!
//! All state-related types for the application: screens, the session, the
//! login form machine, and the per-screen list view state.

use std::collections::HashMap;
use std::sync::Arc;

use shared::{count_label, Project, Report};

use crate::core::ApiService;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Officials login form
    Login,
    /// Landing screen after login, with navigation buttons
    Dashboard,
    /// Infrastructure project listing
    Projects,
    /// Citizen report listing with status controls
    Reports,
}

impl Screen {
    /// All screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[Screen::Login, Screen::Dashboard, Screen::Projects, Screen::Reports]
    }

    /// Screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Officials Login",
            Screen::Dashboard => "Dashboard",
            Screen::Projects => "Projects",
            Screen::Reports => "Reports",
        }
    }
}

/// In-memory authentication session: the `{token, role}` pair for the current
/// user.
///
/// The fields are private so both are always written together: `set` on login
/// success, `clear` on logout, nothing else. A token is never held without a
/// role, and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    role: Option<String>,
}

impl Session {
    /// Populate the session atomically on a successful official login.
    pub fn set(&mut self, token: String, role: String) {
        self.token = Some(token);
        self.role = Some(role);
    }

    /// Clear the session atomically on logout.
    pub fn clear(&mut self) {
        self.token = None;
        self.role = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Display state of a list screen's async data.
///
/// Exactly one mode is active at any instant, and transitions always replace
/// the whole value (never a field at a time), so a stale error can never
/// render next to a loaded list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    /// A fetch is in flight; previous items are already dropped.
    Loading,
    /// The fetch failed; items are not retained.
    Error(String),
    /// The fetch succeeded with zero items.
    Empty,
    /// The fetch succeeded; items are kept in server-returned order.
    Loaded(Vec<T>),
}

impl<T> ListView<T> {
    /// Map a completed fetch into its display mode.
    pub fn from_fetch(result: Result<Vec<T>, String>) -> Self {
        match result {
            Ok(items) if items.is_empty() => ListView::Empty,
            Ok(items) => ListView::Loaded(items),
            Err(message) => ListView::Error(message),
        }
    }

    /// Status line for the screen header. `noun` is the singular record name
    /// ("project" / "report").
    pub fn status_line(&self, noun: &str) -> String {
        match self {
            ListView::Loading => format!("Loading {}s…", noun),
            ListView::Error(message) => format!("Error: {}", message),
            ListView::Empty => format!("No {}s found", noun),
            ListView::Loaded(items) => count_label(items.len(), noun),
        }
    }

    /// Items to render; empty for every mode but `Loaded`.
    pub fn items(&self) -> &[T] {
        match self {
            ListView::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// Per-screen pane: the list view plus the bookkeeping that keeps abandoned
/// fetches from clobbering a newer visit.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPane<T> {
    /// Current display mode, always written as a unit.
    pub view: ListView<T>,
    /// Sequence number of the most recent entry cycle. A fetch result carries
    /// the seq it was issued under; mismatches are discarded as stale.
    pub seq: u64,
    /// Transient status override for the report-update sub-flow. Unlike
    /// `view`, a notice overlays the status line without touching the
    /// rendered list.
    pub notice: Option<String>,
}

impl<T> Default for ListPane<T> {
    fn default() -> Self {
        Self {
            view: ListView::Empty,
            seq: 0,
            notice: None,
        }
    }
}

impl<T> ListPane<T> {
    /// Start a fresh entry cycle: drop previous items, enter loading mode,
    /// clear any notice, and return the new sequence number for the fetch.
    pub fn begin_load(&mut self) -> u64 {
        self.view = ListView::Loading;
        self.notice = None;
        self.seq += 1;
        self.seq
    }

    /// Whether a result issued under `seq` still belongs to the current visit.
    pub fn accepts(&self, seq: u64) -> bool {
        self.seq == seq
    }

    /// Status line with any transient notice taking precedence.
    pub fn status_line(&self, noun: &str) -> String {
        match &self.notice {
            Some(notice) => notice.clone(),
            None => self.view.status_line(noun),
        }
    }
}

/// Login form phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    /// Waiting for input; validation failures stay here.
    #[default]
    Idle,
    /// A login call is in flight.
    Submitting,
}

/// Login screen state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub phase: LoginPhase,
    pub error: Option<String>,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Login form machine
    pub login: LoginForm,
    /// Auth token and role, written only by login success and logout
    pub session: Session,
    /// Projects screen pane
    pub projects: ListPane<Project>,
    /// Reports screen pane
    pub reports: ListPane<Report>,
    /// Locally selected candidate status per report row, keyed by report id.
    /// Reset whenever an authoritative list arrives.
    pub status_drafts: HashMap<i64, String>,
    /// Backend API service (trait object so tests can inject a mock)
    pub api: Arc<dyn ApiService>,
}

impl AppState {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            current_screen: Screen::Login,
            login: LoginForm::default(),
            session: Session::default(),
            projects: ListPane::default(),
            reports: ListPane::default(),
            status_drafts: HashMap::new(),
            api,
        }
    }

    /// Check if the user is authenticated (session holds a token)
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Check if a screen requires authentication
    pub fn requires_auth(screen: Screen) -> bool {
        matches!(screen, Screen::Dashboard | Screen::Projects | Screen::Reports)
    }
}
