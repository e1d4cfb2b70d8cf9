//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{LoginResponse, Project, Report, UpdateAck};

/// Trait for backend API operations.
///
/// Controllers and async tasks only ever see this trait; production code
/// injects [`crate::services::api::ApiClient`], tests inject a mock that
/// records calls and replays canned responses.
///
/// Every operation returns `Result<T, String>`: the `Err` message is the
/// uniform recovery of any transport-level failure (DNS, connection refused,
/// timeout, malformed body). Application-level outcomes travel inside the `Ok`
/// payloads and are interpreted by the caller.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Authenticate against `POST /auth/login`. The response body is passed
    /// through as-is; this layer does not judge token or role.
    async fn login(&self, email: String, password: String) -> Result<LoginResponse, String>;

    /// Fetch all projects. A bearer header is attached only when a token is
    /// present; an absent token still issues the call and lets the backend
    /// reject it.
    async fn list_projects(&self, token: Option<String>) -> Result<Vec<Project>, String>;

    /// Fetch all reports, same auth pattern as [`Self::list_projects`].
    async fn list_reports(&self, token: Option<String>) -> Result<Vec<Report>, String>;

    /// Set a report's status via `PUT /reports/update/{id}`. `report_id` must
    /// already be known to the caller; no existence check is made here.
    async fn update_report_status(
        &self,
        token: Option<String>,
        report_id: i64,
        new_status: String,
    ) -> Result<UpdateAck, String>;
}
