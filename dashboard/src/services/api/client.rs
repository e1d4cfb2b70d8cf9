//! # API Client
//!
//! Main HTTP client for backend API communication.

use async_trait::async_trait;
use reqwest::Client;

use crate::core::service::ApiService;
use shared::{LoginResponse, Project, Report, UpdateAck};

/// Default base URL for the backend API server.
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the backend base URL.
const API_BASE_URL_ENV: &str = "CITYPULSE_API_URL";

/// Fixed per-request timeout. A call either returns within this window or is
/// converted into an error; there is no retry.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP client for communicating with the CityPulse backend.
///
/// Maintains a connection pool across calls. The 10 second timeout prevents a
/// hung backend from freezing fetches indefinitely.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the configured base URL
    /// (`CITYPULSE_API_URL`, falling back to `http://127.0.0.1:5000`).
    pub fn new() -> Self {
        let base_url = std::env::var(API_BASE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL for API requests, without a trailing slash.
    pub(crate) fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<LoginResponse, String> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn list_projects(&self, token: Option<String>) -> Result<Vec<Project>, String> {
        crate::services::api::projects::list_projects(self, token).await
    }

    async fn list_reports(&self, token: Option<String>) -> Result<Vec<Report>, String> {
        crate::services::api::reports::list_reports(self, token).await
    }

    async fn update_report_status(
        &self,
        token: Option<String>,
        report_id: i64,
        new_status: String,
    ) -> Result<UpdateAck, String> {
        crate::services::api::reports::update_report_status(self, token, report_id, new_status)
            .await
    }
}
