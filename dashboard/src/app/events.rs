//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! rendering thread. Every network call finishes by sending exactly one of
//! these; the rendering loop applies them in [`crate::app::App::on_tick`].

use shared::{LoginResponse, Project, Report, UpdateAck};

/// Async task results sent to the rendering thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login call completed; the payload is interpreted by the event handler,
    /// not by the API layer.
    LoginResult(Result<LoginResponse, String>),
    /// Project fetch completed. `seq` identifies the entry cycle that issued
    /// the fetch; stale sequences are discarded.
    ProjectsLoaded {
        seq: u64,
        result: Result<Vec<Project>, String>,
    },
    /// Report fetch completed, same staleness rule as `ProjectsLoaded`.
    ReportsLoaded {
        seq: u64,
        result: Result<Vec<Report>, String>,
    },
    /// Report status update completed. Success triggers a full reload of the
    /// reports screen rather than patching the row locally.
    ReportUpdated {
        report_id: i64,
        result: Result<UpdateAck, String>,
    },
}
