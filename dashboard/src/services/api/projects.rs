//! # Project Listing Endpoint

use shared::{Project, ProjectListResponse};

use super::client::ApiClient;

/// Fetch all infrastructure projects.
///
/// The bearer header is attached only when a token is present; an absent
/// token still issues the call so the backend can reject it. The backend
/// answers with either a bare array or `{"projects": [...]}`; both shapes
/// are normalized into one `Vec<Project>` here, so callers never branch on
/// payload shape.
#[tracing::instrument(skip(client, token), fields(has_token = token.is_some()))]
pub async fn list_projects(
    client: &ApiClient,
    token: Option<String>,
) -> Result<Vec<Project>, String> {
    let start = std::time::Instant::now();

    let mut request = client
        .client
        .get(format!("{}/projects", client.base_url()));
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|e| {
        tracing::warn!(error = %e, "Project fetch network error");
        format!("Network error: {}", e)
    })?;

    let envelope = response.json::<ProjectListResponse>().await.map_err(|e| {
        tracing::warn!(error = %e, "Project fetch parse error");
        format!("Failed to parse response: {}", e)
    })?;

    let projects = envelope.into_items();
    tracing::debug!(
        count = projects.len(),
        duration_ms = start.elapsed().as_millis(),
        "Projects fetched"
    );
    Ok(projects)
}
