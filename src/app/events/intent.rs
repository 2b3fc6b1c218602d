use crate::shared::DemoOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Primäre Maustaste im Viewport gedrückt (Screen-Koordinaten relativ zum Viewport)
    PointerPressed { screen_pos: glam::Vec2 },
    /// Maus bewegt, während die primäre Taste gedrückt ist
    PointerMoved { screen_pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Kontrollpunkte auf die Startpositionen zurücksetzen
    ResetCurveRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Optionen-Dialog öffnen
    OpenOptionsRequested,
    /// Optionen-Dialog schließen
    CloseOptionsRequested,
    /// Optionen wurden im Dialog geändert (live übernehmen)
    OptionsChanged { options: DemoOptions },
    /// Optionen speichern
    SaveOptionsRequested,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
