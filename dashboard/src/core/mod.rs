//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`ApiService`)
//!
//! The [`service::ApiService`] trait is the seam between controllers and the
//! HTTP layer: production code injects [`crate::services::api::ApiClient`],
//! tests inject a recording mock.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
