//! # Screen Renderers
//!
//! One module per screen. Each renderer draws from the state snapshot and
//! routes user actions through the [`crate::app::App`] handlers.

pub mod dashboard;
pub mod login;
pub mod projects;
pub mod reports;
