//! # Services Module
//!
//! External service integrations for the officials dashboard. There is exactly
//! one external system: the CityPulse backend REST API.
//!
//! ```text
//! services/
//! └── api/    - Backend HTTP API client
//!              (login, project listing, report listing, report updates)
//! ```
//!
//! The API client is stateless per call: every operation is a single
//! request/response pair with a fixed 10 second timeout, and every transport
//! failure is recovered into a uniform error message before it reaches a
//! controller.

pub mod api;

pub use api::ApiClient;
