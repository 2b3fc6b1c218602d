//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, StatusMessage};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for (index, point) in state.curve.control_points().iter().enumerate() {
                if index > 0 {
                    ui.separator();
                }
                ui.label(format!("P{}: ({:.3}, {:.3})", index, point.x, point.y));
            }

            ui.separator();

            match state.drag.grabbed {
                Some(index) => ui.label(format!("Grabbed: P{}", index)),
                None => ui.label("Grabbed: -"),
            };

            ui.separator();

            let size = state.view.viewport.size();
            ui.label(format!("Viewport: {:.0} x {:.0}", size.x, size.y));

            if let Some(ref msg) = state.status_message {
                ui.separator();
                ui.label(status_text(msg));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

/// Nur Fehler werden als gelbe Warnung dargestellt.
fn status_text(msg: &StatusMessage) -> egui::RichText {
    if msg.is_error {
        egui::RichText::new(format!("⚠ {}", msg.text)).color(egui::Color32::YELLOW)
    } else {
        egui::RichText::new(&msg.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_message_is_plain() {
        let text = status_text(&StatusMessage::info("Options saved to x.toml"));
        assert_eq!(text.text(), "Options saved to x.toml");
    }

    #[test]
    fn error_message_is_marked_as_warning() {
        let text = status_text(&StatusMessage::error("Saving options failed"));
        assert_eq!(text.text(), "⚠ Saving options failed");
    }
}
