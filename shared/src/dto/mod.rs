//! # Data Transfer Objects (DTOs)
//!
//! All data structures used for communication between the dashboard client and
//! the CityPulse backend REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login request/response and the official role constant
//! - [`project`] - Infrastructure project records and their list envelope
//! - [`report`] - Citizen report records, status updates, and their list envelope
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior); the report `type`
//!   field is renamed since `type` is a Rust keyword
//! - **Optional fields**: default to `None`/empty when absent from the payload
//! - **All types**: implement `Deserialize`; request bodies also `Serialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/json
//!
//! {"email": "official@city.gov", "password": "secret"}
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {"token": "eyJhbGciOi...", "role": "official"}
//! ```

pub mod auth;
pub mod project;
pub mod report;

pub use auth::*;
pub use project::*;
pub use report::*;
