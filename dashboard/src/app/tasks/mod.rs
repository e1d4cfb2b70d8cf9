//! # Async Tasks
//!
//! Async task spawning for backend fetches. Each function runs on the
//! rendering thread just long enough to snapshot the session token and mark
//! the pane loading, then moves the network call onto the tokio runtime. The
//! task's only way back into the application is the event channel.

pub mod projects;
pub mod reports;
