//! # Backend API Client Module
//!
//! HTTP client for communicating with the CityPulse backend API server.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct and common functionality
//! ├── auth.rs      - Authentication endpoint (login)
//! ├── projects.rs  - Project listing endpoint
//! └── reports.rs   - Report listing and status update endpoints
//! ```
//!
//! Each endpoint module exposes free functions taking `&ApiClient`; the
//! [`crate::core::ApiService`] impl on [`ApiClient`] delegates to them.

pub mod auth;
pub mod client;
pub mod projects;
pub mod reports;

pub use client::ApiClient;
