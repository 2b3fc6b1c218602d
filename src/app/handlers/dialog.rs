//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::{AppState, StatusMessage};
use crate::shared::DemoOptions;
use std::path::Path;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen für die laufende Sitzung.
pub fn apply_options(state: &mut AppState, options: DemoOptions) {
    state.options = options;
}

/// Persistiert die aktuellen Optionen in der Konfigurationsdatei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    save_options_to(state, &DemoOptions::config_path())
}

fn save_options_to(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    if let Err(e) = state.options.save_to_file(path) {
        state.status_message = Some(StatusMessage::error(format!(
            "Saving options failed: {e:#}"
        )));
        return Err(e);
    }
    state.status_message = Some(StatusMessage::info(format!(
        "Options saved to {}",
        path.display()
    )));
    Ok(())
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = DemoOptions::default();
    save_options(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_save_reports_info() {
        let path = std::env::temp_dir().join(format!(
            "bezier_drag_demo_dialog_save_{}.toml",
            std::process::id()
        ));
        let mut state = AppState::new();

        save_options_to(&mut state, &path).expect("speicherbar");
        let _ = std::fs::remove_file(&path);

        let status = state.status_message.expect("Statusmeldung gesetzt");
        assert!(!status.is_error);
        assert!(status.text.starts_with("Options saved to"));
    }

    #[test]
    fn failed_save_reports_error() {
        let path = std::env::temp_dir()
            .join("bezier_drag_demo_missing_dir")
            .join("nested")
            .join("options.toml");
        let mut state = AppState::new();

        assert!(save_options_to(&mut state, &path).is_err());

        let status = state.status_message.expect("Statusmeldung gesetzt");
        assert!(status.is_error);
        assert!(status.text.starts_with("Saving options failed"));
    }
}
