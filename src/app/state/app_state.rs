use crate::app::CommandLog;
use crate::core::ControlPoints;
use crate::shared::DemoOptions;

use super::{CurveState, DragState, ViewState};

/// Meldung für die Status-Bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Anzeigetext
    pub text: String,
    /// Fehler werden als Warnung hervorgehoben
    pub is_error: bool,
}

impl StatusMessage {
    /// Neutrale Rückmeldung (z.B. erfolgreiches Speichern).
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Fehlermeldung.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte + abgetastete Kurve
    pub curve: CurveState,
    /// Drag-State (gegriffener Punkt)
    pub drag: DragState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Startpunkte)
    pub options: DemoOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Statusmeldung für die Status-Bar (z.B. fehlgeschlagenes Speichern)
    pub status_message: Option<StatusMessage>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(DemoOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    ///
    /// Startpunkte und Viewport-Größe werden aus den Optionen übernommen.
    pub fn with_options(options: DemoOptions) -> Self {
        Self {
            curve: CurveState::new(ControlPoints::from_arrays(options.initial_control_points)),
            drag: DragState::new(),
            view: ViewState::new(options.window_size),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            status_message: None,
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
