//! # CityPulse Officials Dashboard - Library Root
//!
//! A native desktop client for municipal officials: authenticate, browse
//! infrastructure projects and citizen reports, and update report statuses
//! against the CityPulse backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI + native window    │
//! │  Tokio         - Async runtime for network tasks       │
//! │  Reqwest       - HTTP client                           │
//! │  shared        - Wire DTOs (workspace crate)           │
//! └───────────────────────────┬────────────────────────────┘
//!                             │ HTTP/JSON (bearer token)
//!                             ▼
//!                  ┌─────────────────────┐
//!                  │  CityPulse backend  │
//!                  │  /auth/login        │
//!                  │  /projects          │
//!                  │  /reports           │
//!                  │  /reports/update/:id│
//!                  └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator - state, events, user-action handlers, async fetch
//!   tasks, and the event handler that applies results on the rendering thread
//! - **core**: Error types and the `ApiService` injection seam
//! - **services**: Backend HTTP client (one module per endpoint family)
//! - **ui**: Rendering - screens and theme; draws from state snapshots only
//! - **utils**: Input validation
//!
//! ## Core Concepts
//!
//! Every network call runs in its own short-lived tokio task and reports back
//! through an `async_channel` drained once per frame on the rendering thread.
//! The session (token + role) is written only by login success and logout,
//! both on the rendering thread. List screens hold a single `ListView` value
//! that is always replaced as a unit, so loading/error/empty/loaded modes
//! never mix. Results from abandoned screen visits are discarded by a
//! sequence check rather than cancelled.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```
//!
//! The app-level suite in `app::tests` drives the real handler/event flow
//! against a recording mock of the `ApiService` trait.

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, DashboardApp, Screen};
pub use core::{AppError, Result};
