//! # Projects Screen
//!
//! Read-only listing of municipal infrastructure projects.

use shared::{or_placeholder, Project};

use crate::app::AppState;
use crate::ui::theme::Theme;

/// Render the projects screen
pub fn render(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(
        egui::RichText::new(state.projects.status_line("project")).color(theme.text_muted),
    );
    ui.add_space(4.0);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for project in state.projects.view.items() {
                project_row(ui, project, theme);
                ui.add_space(8.0);
            }
        });
}

fn project_row(ui: &mut egui::Ui, project: &Project, theme: &Theme) {
    let title = if project.title.trim().is_empty() {
        "Untitled"
    } else {
        &project.title
    };

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(title).color(theme.heading).strong());
        ui.label(
            egui::RichText::new(format!(
                "Location: {} | Status: {} | Congestion: {} | Hazard: {}",
                or_placeholder(&project.location),
                or_placeholder(&project.status),
                or_placeholder(&project.congestion_level),
                or_placeholder(&project.hazard_type),
            ))
            .color(theme.text_muted),
        );
        ui.label(or_placeholder(&project.description));
    });
}
