use serde::{Deserialize, Serialize};

/// The only role permitted past the login screen.
pub const OFFICIAL_ROLE: &str = "official";

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response, passed through to the caller as-is.
///
/// The backend answers with `{token, role}` on success and `{msg}` on an
/// application-level failure (bad credentials, wrong role). Every field is
/// optional so both shapes parse; interpreting the combination is the
/// caller's job, not this layer's.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl LoginResponse {
    /// An authenticated official: token present and role exactly "official".
    pub fn is_official(&self) -> bool {
        self.token.is_some() && self.role.as_deref() == Some(OFFICIAL_ROLE)
    }
}
