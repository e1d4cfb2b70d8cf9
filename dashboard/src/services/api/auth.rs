//! # Authentication Endpoint
//!
//! Handles official login.

use shared::{LoginRequest, LoginResponse};

use super::client::ApiClient;

/// Login with email and password.
///
/// The response body is parsed and handed back without interpretation: a
/// success carries `{token, role}`, an application-level rejection carries
/// `{msg}`. Only a call that fails to complete (network error, timeout,
/// non-JSON body) becomes an `Err`.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<LoginResponse, String> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };

    let response = client
        .client
        .post(format!("{}/auth/login", client.base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            format!("Network error: {}", e)
        })?;

    let result = response.json::<LoginResponse>().await.map_err(|e| {
        tracing::error!(error = %e, "Login response parse error");
        format!("Failed to parse response: {}", e)
    });

    if let Ok(body) = &result {
        tracing::info!(
            duration_ms = start.elapsed().as_millis(),
            official = body.is_official(),
            "Login call completed"
        );
    }
    result
}
