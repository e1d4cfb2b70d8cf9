//! # Reports Screen
//!
//! Citizen report listing with per-row status controls.

use shared::{or_placeholder, Report, REPORT_STATUS_CHOICES, REPORT_STATUS_PENDING};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;

/// Render the reports screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.label(egui::RichText::new(state.reports.status_line("report")).color(theme.text_muted));
    ui.add_space(4.0);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for report in state.reports.view.items() {
                report_row(ui, state, app, report, theme);
                ui.add_space(10.0);
            }
        });
}

fn report_row(ui: &mut egui::Ui, state: &AppState, app: &mut App, report: &Report, theme: &Theme) {
    let report_type = if report.report_type.trim().is_empty() {
        "Issue"
    } else {
        &report.report_type
    };

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(format!(
                "{} • #{} • Status: {}",
                report_type,
                report.id,
                or_placeholder(&report.status)
            ))
            .color(theme.heading)
            .strong(),
        );
        ui.label(
            egui::RichText::new(format!(
                "Location: {} | Time: {}",
                or_placeholder(&report.location),
                or_placeholder(&report.timestamp),
            ))
            .color(theme.text_muted),
        );
        ui.label(or_placeholder(&report.description));
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Candidate status: the local draft if one exists, otherwise the
            // row's current status
            let current = state
                .status_drafts
                .get(&report.id)
                .cloned()
                .unwrap_or_else(|| {
                    if report.status.is_empty() {
                        REPORT_STATUS_PENDING.to_string()
                    } else {
                        report.status.clone()
                    }
                });
            let mut selected = current.clone();

            egui::ComboBox::from_id_salt(("report_status", report.id))
                .width(160.0)
                .selected_text(selected.clone())
                .show_ui(ui, |ui| {
                    for choice in REPORT_STATUS_CHOICES {
                        ui.selectable_value(&mut selected, choice.to_string(), *choice);
                    }
                });

            if selected != current {
                app.handle_status_draft_change(report.id, selected);
            }

            if ui
                .add_sized(
                    [160.0, 28.0],
                    egui::Button::new("Update Status").fill(theme.accent),
                )
                .clicked()
            {
                app.handle_update_status_click(report.id);
            }
        });
    });
}
