//! # Common Error Types
//!
//! Consolidated error handling for the dashboard application.
//!
//! ## Error Categories
//!
//! - **Api**: Backend API communication errors (network, timeout, JSON parsing)
//! - **State**: Application state management errors (window setup, invalid state)
//! - **Validation**: Input validation errors (missing fields)
//!
//! Transport failures never cross the async boundary as errors of this type;
//! they are recovered into plain message strings inside the API layer (see
//! [`crate::services::api`]) and rendered as screen text. `AppError` is the
//! typed surface for everything else.

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a descriptive message; `thiserror` provides `Display`
/// and `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication failure surfaced past the message-string
    /// boundary (for example a client that could not even be constructed).
    #[error("API error: {0}")]
    Api(String),

    /// Application state or windowing failure.
    #[error("State error: {0}")]
    State(String),

    /// Local input validation failure; never issues a network call.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}
