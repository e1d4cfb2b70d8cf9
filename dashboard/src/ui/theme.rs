//! # Theme
//!
//! Color palette for the dashboard UI.

use egui::Color32;

/// Dashboard color palette
pub struct Theme {
    /// Headings and emphasized text
    pub heading: Color32,
    /// Secondary text (meta lines, hints)
    pub text_muted: Color32,
    /// Error and validation messages
    pub error: Color32,
    /// Status line while a fetch or update is in flight
    pub busy: Color32,
    /// Accent for primary action buttons
    pub accent: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading: Color32::from_rgb(235, 235, 235),
            text_muted: Color32::from_rgb(150, 150, 150),
            error: Color32::from_rgb(240, 80, 80),
            busy: Color32::from_rgb(200, 180, 80),
            accent: Color32::from_rgb(70, 130, 200),
        }
    }
}
