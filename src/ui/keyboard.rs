//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Momentaufnahme der relevanten Tasten eines Frames.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct KeySample {
    pub command: bool,
    pub key_r: bool,
    pub key_s: bool,
    pub key_comma: bool,
    pub key_escape: bool,
}

impl KeySample {
    fn read(ui: &egui::Ui) -> Self {
        ui.input(|i| Self {
            command: i.modifiers.command,
            key_r: i.key_pressed(egui::Key::R),
            key_s: i.key_pressed(egui::Key::S),
            key_comma: i.key_pressed(egui::Key::Comma),
            key_escape: i.key_pressed(egui::Key::Escape),
        })
    }
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    // Tasten gehören dem Textfeld, solange eines fokussiert ist
    if ui.ctx().wants_keyboard_input() {
        return Vec::new();
    }
    map_keys(KeySample::read(ui))
}

pub(super) fn map_keys(keys: KeySample) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if keys.command && keys.key_comma {
        events.push(AppIntent::OpenOptionsRequested);
    }

    if keys.command && keys.key_s {
        events.push(AppIntent::SaveOptionsRequested);
    }

    if keys.key_r && !keys.command {
        events.push(AppIntent::ResetCurveRequested);
    }

    if keys.key_escape {
        events.push(AppIntent::ExitRequested);
    }

    events
}
