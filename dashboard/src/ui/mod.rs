//! # GUI Rendering Framework
//!
//! The rendering collaborator: it reads a snapshot of application state,
//! draws the active screen, and feeds user actions back through the [`App`]
//! handlers. No state is mutated here except through those handlers.

pub mod screens;
pub mod theme;

use crate::app::{App, AppState, Screen};
use theme::Theme;

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Snapshot state for rendering; skip the frame if a task briefly holds
    // the lock
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };

    let theme = Theme::default();

    egui::CentralPanel::default().show(ctx, |ui| {
        let current_screen = state.current_screen;

        // Redirect to the login screen rather than rendering a protected
        // screen without a session
        if AppState::requires_auth(current_screen) && !state.is_authenticated() {
            app.handle_screen_change(Screen::Login);
            screens::login::render(ui, &state, app, &theme);
            return;
        }

        if state.is_authenticated() {
            render_nav_bar(ui, &state, app);
            ui.separator();
            ui.add_space(6.0);
        }

        match current_screen {
            Screen::Login => screens::login::render(ui, &state, app, &theme),
            Screen::Dashboard => screens::dashboard::render(ui, &state, app, &theme),
            Screen::Projects => screens::projects::render(ui, &state, &theme),
            Screen::Reports => screens::reports::render(ui, &state, app, &theme),
        }
    });
}

/// Tab-style navigation bar shown on authenticated screens.
fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        for screen in [Screen::Dashboard, Screen::Projects, Screen::Reports] {
            let selected = state.current_screen == screen;
            if ui.selectable_label(selected, screen.title()).clicked() && !selected {
                app.handle_screen_change(screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Logout").clicked() {
                app.handle_logout();
            }
        });
    });
}
