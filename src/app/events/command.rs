use crate::shared::DemoOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Viewport-Größe im State aktualisieren
    SetViewportSize { size: [f32; 2] },
    /// Hit-Test an der Druckposition, bei Treffer Punkt greifen
    BeginDrag { screen_pos: glam::Vec2 },
    /// Gegriffenen Punkt auf die Zeigerposition setzen
    UpdateDrag { screen_pos: glam::Vec2 },
    /// Drag beenden (Punkt loslassen)
    EndDrag,
    /// Kontrollpunkte auf die Startpositionen zurücksetzen
    ResetControlPoints,
    /// Anwendung beenden
    RequestExit,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen (ohne Persistierung)
    ApplyOptions { options: DemoOptions },
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptions,
    /// Optionen auf Standardwerte zurücksetzen und persistieren
    ResetOptions,
}
