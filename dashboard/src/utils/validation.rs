/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate login credentials before any network call is issued.
///
/// Both fields must be non-empty after trimming whitespace; the backend does
/// the rest (format, existence, role).
pub fn validate_credentials(email: &str, password: &str) -> ValidationResult {
    if email.trim().is_empty() || password.trim().is_empty() {
        return ValidationResult::err("Email & password are required");
    }

    ValidationResult::ok()
}
