//! Optionen-Dialog für Farben, Größen und Startpunkte.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            // ── Kurve ───────────────────────────────────────
            ui.collapsing("Kurve", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Linienstärke (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.curve_width_px)
                                .range(1.0..=40.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Farbe:", &mut opts.curve_color);
            });

            // ── Kontrollpunkte ──────────────────────────────
            ui.collapsing("Kontrollpunkte", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Größe (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.point_size_px)
                                .range(2.0..=60.0)
                                .speed(0.2),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Hitbox (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.hit_box_size_px)
                                .range(2.0..=60.0)
                                .speed(0.2),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Farbe:", &mut opts.point_color);
                changed |= color_edit(ui, "Gegriffen:", &mut opts.point_color_grabbed);
            });

            // ── Startpositionen ─────────────────────────────
            ui.collapsing("Startpositionen (NDC)", |ui| {
                for (index, point) in opts.initial_control_points.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(format!("P{}:", index));
                        for axis in point.iter_mut() {
                            changed |= ui
                                .add(egui::DragValue::new(axis).range(-1.0..=1.0).speed(0.01))
                                .changed();
                        }
                    });
                }
                ui.small("Wirkt beim nächsten Reset (R).");
            });

            // ── Hintergrund ─────────────────────────────────
            ui.collapsing("Hintergrund", |ui| {
                changed |= color_edit(ui, "Farbe:", &mut opts.background_color);
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut rgba = egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]);
        if egui::color_picker::color_edit_button_rgba(
            ui,
            &mut rgba,
            egui::color_picker::Alpha::OnlyBlend,
        )
        .changed()
        {
            *color = rgba.to_rgba_unmultiplied();
            changed = true;
        }
    });
    changed
}
