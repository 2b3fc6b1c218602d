//! Top-Menü (File, Curve, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let options_label = if state.show_options_dialog {
                    "Close Options"
                } else {
                    "Options... (Ctrl+,)"
                };
                if ui.button(options_label).clicked() {
                    events.push(if state.show_options_dialog {
                        AppIntent::CloseOptionsRequested
                    } else {
                        AppIntent::OpenOptionsRequested
                    });
                    ui.close();
                }

                if ui.button("Save Options (Ctrl+S)").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit (Esc)").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Curve", |ui| {
                if ui.button("Reset Control Points (R)").clicked() {
                    events.push(AppIntent::ResetCurveRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("Bézier Drag Demo v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
