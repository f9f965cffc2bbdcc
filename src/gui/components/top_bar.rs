// src/gui/components/top_bar.rs
//
// Title, status line and the manual refresh button.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Used Car Inventory");
        ui.separator();
        ui.label(&app.state.gui.status);

        if let Some(ago) = app.showroom.last_refresh().and_then(|t| t.elapsed().ok()) {
            ui.weak(format!("updated {}s ago", ago.as_secs()));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⟳ Refresh now").clicked() {
                app.refresh_now();
            }
        });
    });
}
