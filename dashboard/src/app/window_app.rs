//! # Window App
//!
//! The eframe host wrapper around [`App`]. Each frame it drains pending async
//! results, then hands off to the UI layer for rendering. Everything in this
//! file runs on the rendering thread.

use crate::app::App;

/// eframe application hosting the dashboard.
pub struct DashboardApp {
    app: App,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { app: App::new() }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply async task results before drawing this frame
        self.app.on_tick();

        crate::ui::render(ctx, &mut self.app);

        // Poll the event channel again soon even without user input, so fetch
        // completions show up promptly
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
