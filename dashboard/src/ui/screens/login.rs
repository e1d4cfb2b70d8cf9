//! # Login Screen
//!
//! Officials login form.

use crate::app::{App, AppState, LoginPhase};
use crate::ui::theme::Theme;

/// Render the login screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(90.0);
        ui.heading(egui::RichText::new("CityPulse — Officials Login").color(theme.heading));
        ui.add_space(20.0);

        let mut email_input = state.login.email.clone();
        let mut password_input = state.login.password.clone();
        let mut submit = false;

        let email_response = ui.add_sized(
            [280.0, 30.0],
            egui::TextEdit::singleline(&mut email_input).hint_text("Official Email"),
        );
        if email_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        ui.add_space(8.0);

        let password_response = ui.add_sized(
            [280.0, 30.0],
            egui::TextEdit::singleline(&mut password_input)
                .password(true)
                .hint_text("Password"),
        );
        if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        // Write edits back into state
        {
            let mut state = app.state.write();
            state.login.email = email_input.clone();
            state.login.password = password_input.clone();
        }

        ui.add_space(12.0);

        let clicked = ui
            .add_sized(
                [280.0, 34.0],
                egui::Button::new("Login").fill(theme.accent),
            )
            .clicked();
        if clicked || submit {
            app.handle_login_click(email_input, password_input);
        }

        ui.add_space(10.0);

        match (&state.login.phase, &state.login.error) {
            (LoginPhase::Submitting, _) => {
                ui.label(egui::RichText::new("Signing in…").color(theme.busy));
            }
            (_, Some(error)) => {
                ui.label(egui::RichText::new(error.as_str()).color(theme.error));
            }
            _ => {}
        }
    });
}
