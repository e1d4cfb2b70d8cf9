//! # Dashboard Screen
//!
//! Landing screen after login with navigation into the list screens.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;

/// Render the dashboard screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading(egui::RichText::new("Welcome, Official").color(theme.heading));
        if let Some(role) = state.session.role() {
            ui.label(egui::RichText::new(format!("Signed in as {}", role)).color(theme.text_muted));
        }
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            // Center the button row
            let button_width = 140.0;
            let total = button_width * 3.0 + ui.spacing().item_spacing.x * 2.0;
            ui.add_space((ui.available_width() - total).max(0.0) / 2.0);

            if ui
                .add_sized([button_width, 40.0], egui::Button::new("Projects"))
                .clicked()
            {
                app.handle_screen_change(Screen::Projects);
            }
            if ui
                .add_sized([button_width, 40.0], egui::Button::new("Reports"))
                .clicked()
            {
                app.handle_screen_change(Screen::Reports);
            }
            if ui
                .add_sized([button_width, 40.0], egui::Button::new("Logout"))
                .clicked()
            {
                app.handle_logout();
            }
        });
    });
}
