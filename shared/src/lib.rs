//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the dashboard client and the
//! CityPulse backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login request/response shapes
//!   - **[`dto::project`]**: Municipal infrastructure project records
//!   - **[`dto::report`]**: Citizen report records and status updates
//! - **[`utils`]**: Shared display helpers (placeholders, count labels)
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using default `serde` behavior:
//! - Field names use **snake_case** in Rust, mapping to **snake_case** in JSON
//! - Optional response fields default to `None` when absent
//! - List endpoints may return either a bare JSON array or a wrapped object
//!   (`{"projects": [...]}` / `{"reports": [...]}`); the envelope enums in
//!   [`dto::project`] and [`dto::report`] accept both shapes
//!
//! ## Example
//!
//! ```rust
//! use shared::dto::auth::LoginResponse;
//!
//! let body = r#"{"token": "t1", "role": "official"}"#;
//! let response: LoginResponse = serde_json::from_str(body).unwrap();
//! assert_eq!(response.token.as_deref(), Some("t1"));
//! assert_eq!(response.role.as_deref(), Some("official"));
//! assert!(response.msg.is_none());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
